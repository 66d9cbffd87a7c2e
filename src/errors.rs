use std::io;
use std::path::Path;


pub fn io_error(err: io::Error, file_path: &Path) -> ! {
    eprintln!("IO error: could not read \"{}\".\n{}", file_path.display(), err);
    std::process::exit(1);
}
