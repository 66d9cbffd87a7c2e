use std::fs;
use std::path::Path;
use std::io;


pub fn load_asset(file_path: &Path) -> io::Result<Vec<u8>> {

    let file_content = fs::read(file_path)?;
    Ok(file_content)
}
