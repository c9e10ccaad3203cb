//! The `jsonld` command line tool (`cli` feature): runs one of the five
//! `JsonLdProcessor` operations against a document read from a file or
//! standard input, and prints the result.

use clap::{Parser, Subcommand};
use iref::IriBuf;
use jsonld::loader::ReqwestLoader;
use jsonld::processor::{self, JsonLdProcessor, Options};
use jsonld::warning::LogHandler;
use json_syntax::{Print, Value as Json};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jsonld", author, version, about = "JSON-LD expansion, compaction, flattening, framing and RDF conversion")]
struct Args {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Expand a document into its expanded form.
	Expand {
		/// Document to read. Reads standard input if omitted.
		#[arg(short, long)]
		input: Option<PathBuf>,
		#[arg(long)]
		base: Option<IriBuf>,
	},

	/// Compact a document against a context.
	Compact {
		#[arg(short, long)]
		input: Option<PathBuf>,
		/// The context document to compact against.
		context: PathBuf,
		#[arg(long)]
		base: Option<IriBuf>,
	},

	/// Flatten a document, optionally compacting the result against a
	/// context.
	Flatten {
		#[arg(short, long)]
		input: Option<PathBuf>,
		#[arg(long)]
		context: Option<PathBuf>,
		#[arg(long)]
		base: Option<IriBuf>,
	},

	/// Frame a document against a frame document.
	Frame {
		#[arg(short, long)]
		input: Option<PathBuf>,
		/// The frame document.
		frame: PathBuf,
		#[arg(long)]
		base: Option<IriBuf>,
	},

	/// Convert a document to RDF quads.
	ToRdf {
		#[arg(short, long)]
		input: Option<PathBuf>,
		#[arg(long)]
		base: Option<IriBuf>,
	},
}

fn read_json(path: &Option<PathBuf>) -> Json {
	let content = match path {
		Some(path) => std::fs::read_to_string(path).unwrap_or_else(|e| {
			eprintln!("error reading {}: {e}", path.display());
			std::process::exit(1);
		}),
		None => std::io::read_to_string(std::io::stdin()).unwrap_or_else(|e| {
			eprintln!("error reading standard input: {e}");
			std::process::exit(1);
		}),
	};
	Json::parse_str(&content)
		.unwrap_or_else(|e| {
			eprintln!("malformed JSON: {e}");
			std::process::exit(1);
		})
		.0
}

fn base_options(base: Option<IriBuf>) -> Options {
	match base {
		Some(base) => Options::default().with_base(base),
		None => Options::default(),
	}
}

fn quad_to_string(quad: &jsonld::rdf::Quad) -> String {
	let term_str = |term: &jsonld::rdf::Term| match term {
		jsonld::rdf::Term::Id(id) if id.is_blank() => id.as_str().to_owned(),
		jsonld::rdf::Term::Id(id) => format!("<{}>", id.as_str()),
		jsonld::rdf::Term::Literal(lit) => match &lit.language {
			Some(lang) => format!("\"{}\"@{lang}", lit.lexical),
			None => format!("\"{}\"^^<{}>", lit.lexical, lit.datatype.as_str()),
		},
	};
	let subject = match &quad.subject {
		id if id.is_blank() => id.as_str().to_owned(),
		id => format!("<{}>", id.as_str()),
	};
	let predicate = format!("<{}>", quad.predicate.as_str());
	let object = term_str(&quad.object);
	match &quad.graph {
		Some(graph) if graph.is_blank() => format!("{subject} {predicate} {object} {} .", graph.as_str()),
		Some(graph) => format!("{subject} {predicate} {object} <{}> .", graph.as_str()),
		None => format!("{subject} {predicate} {object} ."),
	}
}

#[tokio::main]
async fn main() {
	let args = Args::parse();
	let loader = ReqwestLoader::new();
	let mut warnings = LogHandler;

	match args.command {
		Command::Expand { input, base } => {
			let document = read_json(&input);
			match document.expand(&loader, base_options(base), &mut warnings).await {
				Ok(expanded) => println!("{}", processor::document_to_json(&expanded).pretty_print()),
				Err(e) => fail(&e),
			}
		}
		Command::Compact { input, context, base } => {
			let document = read_json(&input);
			let context = read_json(&Some(context));
			match document.compact(&context, &loader, base_options(base), &mut warnings).await {
				Ok(compacted) => println!("{}", compacted.pretty_print()),
				Err(e) => fail(&e),
			}
		}
		Command::Flatten { input, context, base } => {
			let document = read_json(&input);
			let context = context.map(|path| read_json(&Some(path)));
			match document.flatten(context.as_ref(), &loader, base_options(base), &mut warnings).await {
				Ok(flattened) => println!("{}", flattened.pretty_print()),
				Err(e) => fail(&e),
			}
		}
		Command::Frame { input, frame, base } => {
			let document = read_json(&input);
			let frame = read_json(&Some(frame));
			match document.frame(&frame, &loader, base_options(base), &mut warnings).await {
				Ok(framed) => println!("{}", framed.pretty_print()),
				Err(e) => fail(&e),
			}
		}
		Command::ToRdf { input, base } => {
			let document = read_json(&input);
			match document.to_rdf(&loader, base_options(base), &mut warnings).await {
				Ok(quads) => {
					for quad in &quads {
						println!("{}", quad_to_string(quad));
					}
				}
				Err(e) => fail(&e),
			}
		}
	}
}

fn fail(e: &jsonld::error::Error) -> ! {
	eprintln!("error: {e}");
	std::process::exit(1);
}
