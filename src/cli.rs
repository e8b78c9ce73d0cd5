use clap::Parser;

#[derive(Parser)]
#[clap(
    version = "0.1",
    about = "Prints the name stored in a compiled Java class file"
)]
pub struct Cli {
    #[clap(value_name = "FILE")]
    pub file: String,
}
