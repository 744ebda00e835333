#[macro_use]
extern crate clap;

use std::io;
use std::path::Path;
use std::process;

use clap::App;
use color256gen::Generator;
use log::debug;

fn main() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	let yaml = load_yaml!("cli.yml");
	let matches = App::from_yaml(yaml).version(crate_version!()).get_matches();

	// INPUT has a default value
	let input = matches.value_of("INPUT").unwrap_or(color256gen::load::DEFAULT_INPUT);
	let generator = Generator::new(Path::new(input));

	let stdout = io::stdout();
	if let Err(err) = generator.run(&mut stdout.lock()) {
		debug!("{:?}", err);
		eprintln!("color256gen: {}", err);
		process::exit(1);
	}
}
