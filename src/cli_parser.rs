use std::path::PathBuf;

use clap::Parser;


#[derive(Parser)]
#[clap(author, about, version)]
pub struct CliParser {

    /// The input file to embed as an asset module.
    #[clap(required = true)]
    pub input_file: PathBuf,

    /// The virtual path to register the asset under, without the implicit
    /// leading `/`. Defaults to the input file path.
    #[clap(short='p', long="path")]
    pub path: Option<String>,

    /// Execute in verbose mode.
    #[clap(short='v', long)]
    pub verbose: bool,

}


impl CliParser {

    /// The virtual registration path: the explicit override if one was given,
    /// the input file path itself otherwise.
    pub fn virtual_path(&self) -> String {
        self.path.clone()
            .unwrap_or_else(|| self.input_file.display().to_string())
    }

}


#[cfg(test)]
mod tests {

    use super::*;


    #[test]
    fn virtual_path_defaults_to_input_file() {
        let args = CliParser::parse_from(["assetgen", "img.bin"]);
        assert_eq!(args.virtual_path(), "img.bin");
    }


    #[test]
    fn virtual_path_override() {
        let args = CliParser::parse_from(["assetgen", "-p", "icons/app.png", "img.bin"]);
        assert_eq!(args.virtual_path(), "icons/app.png");
    }


    #[test]
    fn missing_input_file_is_an_error() {
        assert!(CliParser::try_parse_from(["assetgen"]).is_err());
    }

}
