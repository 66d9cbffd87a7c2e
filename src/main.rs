mod cli_parser;
mod files;
mod module_generator;
mod errors;

use clap::Parser;
use cli_parser::CliParser;


fn main() {

    let args = CliParser::parse();

    let data = files::load_asset(&args.input_file)
        .unwrap_or_else(|err| errors::io_error(err, &args.input_file));

    if args.verbose {
        eprintln!("Read {} bytes from \"{}\".", data.len(), args.input_file.display());
    }

    let module = module_generator::generate(&data, &args.virtual_path());

    println!("{}", module);
}
