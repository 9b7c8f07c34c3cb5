//! GHZ Emission Sweep Demo
//!
//! Lowers GHZ circuits of growing width and reports how the emitted
//! module grows with the circuit.

use clap::Parser;

use gyllir_demos::{create_progress_bar, print_header, print_result, print_section, print_success};
use gyllir_ir::Circuit;
use gyllir_qir::Backend;

#[derive(Parser, Debug)]
#[command(name = "demo-sweep")]
#[command(about = "Sweep QIR emission across GHZ circuit widths")]
struct Args {
    /// Largest GHZ width to emit
    #[arg(short, long, default_value = "32")]
    max_qubits: u32,
}

fn main() {
    let args = Args::parse();

    print_header("GHZ Emission Sweep");

    if args.max_qubits < 2 {
        eprintln!("Error: the sweep needs at least 2 qubits");
        std::process::exit(1);
    }

    let backend = Backend::new(None, None).unwrap();
    let widths: Vec<u32> = (2..=args.max_qubits).collect();
    let pb = create_progress_bar(widths.len() as u64, "emitting");

    let mut rows = Vec::with_capacity(widths.len());
    for width in widths {
        let circuit = Circuit::ghz(width);
        match backend.circuit_to_qir_str(&circuit, false) {
            Ok(qir_str) => rows.push((width, circuit.len(), qir_str.len())),
            Err(e) => {
                pb.finish_and_clear();
                eprintln!("Error emitting {width}-qubit GHZ: {e}");
                std::process::exit(1);
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    print_section("Results");
    for (width, instructions, bytes) in &rows {
        print_result(
            &format!("{width:>3} qubits"),
            format!("{instructions:>4} instructions, {bytes:>6} bytes of QIR"),
        );
    }

    println!();
    print_success("Sweep complete!");
}
