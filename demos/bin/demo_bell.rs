//! Bell Pair Demo
//!
//! Emits the canonical measured Bell pair as a QIR module.

use std::path::PathBuf;

use clap::Parser;

use gyllir_demos::{print_header, print_result, print_section, print_success};
use gyllir_ir::Circuit;
use gyllir_qir::Backend;

#[derive(Parser, Debug)]
#[command(name = "demo-bell")]
#[command(about = "Emit a measured Bell pair as QIR")]
struct Args {
    /// Directory to write the module into (stdout when absent)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite an existing output file
    #[arg(long)]
    overwrite: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    print_header("Bell Pair QIR Demo");

    let circuit = Circuit::bell();
    print_section("Circuit");
    print_result("Instructions", circuit.len());
    print_result("Qubits", circuit.num_qubits());
    print_result("Classical bits", circuit.num_clbits());

    let backend = Backend::new(None, None).unwrap();

    match args.output {
        Some(folder) => {
            if let Err(e) =
                backend.circuit_to_qir_file(&circuit, &folder, "bell", args.overwrite, false)
            {
                eprintln!("Error writing module: {e}");
                std::process::exit(1);
            }
            print_success(&format!("Wrote {}", folder.join("bell.ll").display()));
        }
        None => {
            print_section("QIR Module");
            match backend.circuit_to_qir_str(&circuit, false) {
                Ok(qir_str) => println!("{qir_str}"),
                Err(e) => {
                    eprintln!("Error emitting QIR: {e}");
                    std::process::exit(1);
                }
            }
        }
    }

    println!();
    print_success("Bell demo complete!");
}
