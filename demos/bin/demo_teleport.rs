//! Quantum Teleportation Demo
//!
//! Emits a teleportation circuit whose mid-circuit measurements drive
//! conditioned corrections, exercising the branching form of the module.

use clap::Parser;

use gyllir_demos::circuits::{parity_check_circuit, teleport_circuit};
use gyllir_demos::{print_header, print_info, print_result, print_section, print_success};
use gyllir_qir::Backend;

#[derive(Parser, Debug)]
#[command(name = "demo-teleport")]
#[command(about = "Emit a teleportation circuit as QIR")]
struct Args {
    /// Number of parity-check rounds in the companion circuit
    #[arg(short, long, default_value = "3")]
    rounds: u64,

    /// Show the emitted modules
    #[arg(long)]
    show_qir: bool,

    /// Enable debug logging of the emission pipeline
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

    print_header("Quantum Teleportation Demo");

    print_section("Teleportation Circuit");
    let circuit = teleport_circuit();
    print_result("Instructions", circuit.len());
    print_result("Qubits", circuit.num_qubits());
    print_result("Classical bits", circuit.num_clbits());

    let backend = Backend::new(None, None).unwrap();
    let qir_str = match backend.circuit_to_qir_str(&circuit, false) {
        Ok(qir_str) => qir_str,
        Err(e) => {
            eprintln!("Error emitting QIR: {e}");
            std::process::exit(1);
        }
    };
    print_result("Module size", format!("{} bytes", qir_str.len()));
    print_result(
        "Branches",
        qir_str.matches("br i1").count(),
    );
    if args.show_qir {
        println!("{qir_str}");
    }

    print_section("Parity-Check Rounds");
    let parity = parity_check_circuit(args.rounds);
    let parity_qir = match backend.circuit_to_qir_str(&parity, false) {
        Ok(qir_str) => qir_str,
        Err(e) => {
            eprintln!("Error emitting QIR: {e}");
            std::process::exit(1);
        }
    };
    print_result("Rounds", args.rounds);
    print_result("Module size", format!("{} bytes", parity_qir.len()));
    if args.show_qir {
        println!("{parity_qir}");
    }

    println!();
    print_success("Teleportation demo complete!");
    println!();
    print_info("Each conditional correction reads a %Result slot back through");
    println!("  @__quantum__qis__read_result__body before branching.");
}
