use static_assertions::const_assert;


/// How many byte literals are emitted before the array body wraps onto a new line.
const BYTES_PER_LINE: usize = 16;

const_assert!(BYTES_PER_LINE > 0);


/// Renders the file bytes as a braced C initializer list of hex literals
/// (`0x`-prefixed, lowercase, no padding), wrapped every [`BYTES_PER_LINE`]
/// elements. Byte order and count are preserved exactly.
///
/// An empty input renders as a one-element sentinel `{ 0x0 }` because C
/// rejects an empty initializer list. The caller compensates by passing a
/// literal `0` as the registered size instead of `sizeof(data)`.
fn render_array(data: &[u8]) -> String {

    if data.is_empty() {
        return "{ 0x0 }".to_string();
    }

    // "0xff, " is the longest rendering of a single element.
    let mut array = String::with_capacity(data.len() * 6 + 8);

    array.push_str("{\n  ");

    for (i, byte) in data.iter().enumerate() {

        array.push_str(&format!("{:#x}", byte));

        if i + 1 == data.len() {
            break;
        }

        array.push(',');

        if (i + 1) % BYTES_PER_LINE == 0 {
            array.push_str("\n  ");
        } else {
            array.push(' ');
        }
    }

    array.push_str("\n}");
    array
}


/// Generates a C translation unit that embeds `data` as a static byte array
/// and registers it under `/<virtual_path>` before `main` runs.
///
/// The emitted module forward-declares the external `asset_register` collaborator
/// and calls it exactly once from an `__attribute__((constructor))` function,
/// passing the slash-prefixed virtual path, the array and its byte count.
/// The leading `/` is always prepended, whether or not `virtual_path` already
/// starts with one.
pub fn generate(data: &[u8], virtual_path: &str) -> String {

    let size = if data.is_empty() { "0" } else { "sizeof(data)" };

    format!(
"void asset_register(const char* path, void* data, unsigned long size);

static unsigned char data[] = {array};

__attribute__((constructor)) static void
constructor(void) {{
  asset_register(\"/{path}\", data, {size});
}}
",
        array = render_array(data),
        path = virtual_path,
        size = size,
    )
}
