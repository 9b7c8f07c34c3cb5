//! QIR emitter for lowering circuits to base-profile modules.
//!
//! The emitter walks a circuit twice. A first pass hoists gate
//! definitions into `define` blocks so they precede the entry point's
//! declarations in the output. The second pass writes the body of
//! `@main`, collecting `declare` lines and helper defines in order of
//! first use. All label and variable numbering lives on the emitter, so
//! two conversions of the same circuit produce identical text.

use std::f64::consts::FRAC_PI_2;

use rustc_hash::FxHashSet;

use gyllir_ir::{
    Circuit, ClbitId, GateDefinition, Instruction, InstructionKind, ParameterExpression, QubitId,
    StandardGate,
};

use crate::declarations::{
    format_double, helper_define, intrinsic_symbols, qis_declaration, MEASURE_SYMBOL, QUBIT_TYPE,
    READ_RESULT_SYMBOL, RESET_SYMBOL, RESULT_TYPE,
};
use crate::error::{QirError, QirResult};

/// Returns the text an instruction contributes to the body of `@main`,
/// without the surrounding module.
///
/// Useful for inspecting how a single instruction lowers. Conditionals
/// and repetitions are emitted with fresh label numbering starting at
/// zero.
pub fn call_instruction(instruction: &Instruction) -> QirResult<String> {
    let mut emitter = QirEmitter::new();
    emitter.emit_instruction(instruction)?;
    Ok(emitter.body.trim_end().to_owned())
}

/// Returns the declarations an instruction adds to a module on first
/// use: the `declare` line for intrinsic gates, or the dependency
/// declares followed by the `define` block for gates that lower to
/// helper functions. Gate definitions yield their full `define` block.
pub fn gate_declaration(instruction: &Instruction) -> QirResult<String> {
    let mut emitter = QirEmitter::new();
    match &instruction.kind {
        InstructionKind::GateDef(definition) => emitter.emit_definition(definition)?,
        _ => emitter.emit_instruction(instruction)?,
    }
    emitter.body.clear();
    Ok(emitter.declarations.join("\n").trim().to_owned())
}

/// How a standard gate lowers: straight to a QIS intrinsic, or to a
/// call of a helper function defined in the module.
enum Callee {
    Intrinsic(&'static str),
    Helper(&'static str),
}

/// Qubit-to-parameter mapping inside a gate definition body.
struct DefinitionScope<'a> {
    labels: &'a [QubitId],
    params: &'a [String],
}

pub(crate) struct QirEmitter {
    body: String,
    declarations: Vec<String>,
    seen: FxHashSet<String>,
    labels: u32,
    vars: u32,
    current_label: String,
    num_qubits: u32,
    num_results: u32,
    main_measures: bool,
    any_measures: bool,
    uses_results: bool,
}

impl QirEmitter {
    pub(crate) fn new() -> Self {
        Self {
            body: String::new(),
            declarations: Vec::new(),
            seen: FxHashSet::default(),
            labels: 0,
            vars: 0,
            current_label: "entry".to_owned(),
            num_qubits: 0,
            num_results: 0,
            main_measures: false,
            any_measures: false,
            uses_results: false,
        }
    }

    /// Lowers a whole circuit to a module. `measure_all` appends a
    /// measurement of every qubit into the result slot of the same
    /// index after the last instruction.
    pub(crate) fn emit_module(
        &mut self,
        circuit: &Circuit,
        profile: &str,
        qir_version: (u32, u32),
        measure_all: bool,
    ) -> QirResult<String> {
        for instruction in circuit.iter() {
            if let InstructionKind::GateDef(definition) = &instruction.kind {
                self.emit_definition(definition)?;
            }
        }
        for instruction in circuit.iter() {
            self.emit_instruction(instruction)?;
        }
        if measure_all {
            self.append_measure_all();
        }
        Ok(self.assemble(profile, qir_version))
    }

    fn emit_instruction(&mut self, instruction: &Instruction) -> QirResult<()> {
        match &instruction.kind {
            InstructionKind::Gate(gate) => {
                if let Some(line) = self.gate_line(gate, &instruction.qubits, None)? {
                    self.note_qubits(&instruction.qubits);
                    self.body.push_str(&line);
                }
            }
            InstructionKind::Measure => {
                let line = self.measure_line(instruction, None)?;
                self.note_qubits(&instruction.qubits);
                self.note_result(instruction.clbits[0]);
                self.main_measures = true;
                self.body.push_str(&line);
            }
            InstructionKind::Reset => {
                let line = self.reset_line(instruction, None)?;
                self.note_qubits(&instruction.qubits);
                self.body.push_str(&line);
            }
            InstructionKind::Conditional { circuit } => {
                self.emit_conditional(instruction, circuit)?;
            }
            InstructionKind::Repeat { times, circuit } => {
                self.emit_repeat(*times, circuit)?;
            }
            // Definitions are hoisted by the first pass and add nothing
            // to the body of @main.
            InstructionKind::GateDef(_) => {}
            InstructionKind::GateCall { name, args } => {
                let mut operands = Vec::with_capacity(args.len() + instruction.qubits.len());
                for arg in args {
                    operands.push(self.angle_operand(name, arg, None)?);
                }
                for qubit in &instruction.qubits {
                    operands.push(qubit_operand(None, name, *qubit)?);
                }
                self.note_qubits(&instruction.qubits);
                self.body
                    .push_str(&format!("  call void @{name}({})\n", operands.join(", ")));
            }
        }
        Ok(())
    }

    /// Hoists a gate definition into the declaration stream. The first
    /// definition of a name wins; later ones are dropped.
    fn emit_definition(&mut self, definition: &GateDefinition) -> QirResult<()> {
        if !self.seen.insert(definition.name.clone()) {
            return Ok(());
        }
        let scope = DefinitionScope {
            labels: &definition.qubits,
            params: &definition.params,
        };
        let mut body = String::new();
        let mut measures = false;
        for instruction in definition.circuit.iter() {
            match &instruction.kind {
                InstructionKind::Gate(gate) => {
                    if let Some(line) = self.gate_line(gate, &instruction.qubits, Some(&scope))? {
                        body.push_str(&line);
                    }
                }
                InstructionKind::Measure => {
                    body.push_str(&self.measure_line(instruction, Some(&scope))?);
                    measures = true;
                }
                InstructionKind::Reset => {
                    body.push_str(&self.reset_line(instruction, Some(&scope))?);
                }
                other => {
                    return Err(QirError::UnsupportedInstruction(format!(
                        "{} inside the definition of '{}'",
                        kind_name(other),
                        definition.name
                    )));
                }
            }
        }
        let mut params: Vec<String> = definition
            .params
            .iter()
            .map(|name| format!("double %{name}"))
            .collect();
        params.extend(
            definition
                .qubits
                .iter()
                .map(|qubit| format!("%Qubit* %qubit{}", qubit.index())),
        );
        let attribute = if measures { " #1" } else { "" };
        self.declarations.push(format!(
            "\ndefine void @{}({}){attribute} {{\nentry:\n{body}  ret void\n}}\n",
            definition.name,
            params.join(", "),
        ));
        if measures {
            self.any_measures = true;
            self.uses_results = true;
        }
        Ok(())
    }

    fn emit_conditional(&mut self, instruction: &Instruction, circuit: &Circuit) -> QirResult<()> {
        let condition = *instruction.clbits.first().ok_or_else(|| {
            QirError::UnsupportedInstruction("conditional without a condition bit".to_owned())
        })?;
        self.note_result(condition);
        self.uses_results = true;
        self.declare(READ_RESULT_SYMBOL);
        let var = self.next_var();
        let label = self.next_label();
        self.body.push_str(&format!(
            "  %{var} = call i1 @__quantum__qis__read_result__body(%Result* inttoptr (i64 {} to %Result*))\n",
            condition.index()
        ));
        self.body.push_str(&format!(
            "  br i1 %{var}, label %then{label}, label %continue{label}\n"
        ));
        self.body.push_str(&format!("\nthen{label}:\n"));
        self.current_label = format!("then{label}");
        for inner in circuit.iter() {
            self.emit_instruction(inner)?;
        }
        self.body
            .push_str(&format!("  br label %continue{label}\n"));
        self.body.push_str(&format!("\ncontinue{label}:\n"));
        self.current_label = format!("continue{label}");
        Ok(())
    }

    fn emit_repeat(&mut self, times: u64, circuit: &Circuit) -> QirResult<()> {
        let label = self.next_label();
        let entry = std::mem::replace(&mut self.current_label, format!("loop{label}"));
        let phi = self.next_var();
        let cond = self.next_var();
        // The phi line references the counter increment, whose variable
        // number follows the ones the body allocates, so the body is
        // emitted into its own buffer first.
        let saved = std::mem::take(&mut self.body);
        for inner in circuit.iter() {
            self.emit_instruction(inner)?;
        }
        let inner = std::mem::replace(&mut self.body, saved);
        let step = self.next_var();
        let bound = times.saturating_add(1);
        self.body
            .push_str(&format!("  br label %header{label}\n"));
        self.body.push_str(&format!("\nheader{label}:\n"));
        self.body.push_str(&format!(
            "  %{phi} = phi i64 [ 1, %{entry} ], [ %{step}, %loop{label} ]\n"
        ));
        self.body
            .push_str(&format!("  %{cond} = icmp slt i64 %{phi}, {bound}\n"));
        self.body.push_str(&format!(
            "  br i1 %{cond}, label %loop{label}, label %continue{label}\n"
        ));
        self.body.push_str(&format!("\nloop{label}:\n"));
        self.body.push_str(&inner);
        self.body
            .push_str(&format!("  %{step} = add i64 %{phi}, 1\n"));
        self.body
            .push_str(&format!("  br label %header{label}\n"));
        self.body.push_str(&format!("\ncontinue{label}:\n"));
        self.current_label = format!("continue{label}");
        Ok(())
    }

    /// Builds the call line for a standard gate, or `None` for the
    /// identity.
    fn gate_line(
        &mut self,
        gate: &StandardGate,
        qubits: &[QubitId],
        scope: Option<&DefinitionScope<'_>>,
    ) -> QirResult<Option<String>> {
        let name = gate.name();
        if qubits.len() != gate.num_qubits() {
            return Err(QirError::WrongQubitCount {
                gate: name.to_owned(),
                expected: gate.num_qubits(),
                got: qubits.len(),
            });
        }
        let (callee, args) = match gate {
            StandardGate::I => return Ok(None),
            StandardGate::X => (Callee::Intrinsic("__quantum__qis__x__body"), Vec::new()),
            StandardGate::Y => (Callee::Intrinsic("__quantum__qis__y__body"), Vec::new()),
            StandardGate::Z => (Callee::Intrinsic("__quantum__qis__z__body"), Vec::new()),
            StandardGate::H => (Callee::Intrinsic("__quantum__qis__h__body"), Vec::new()),
            StandardGate::S => (Callee::Intrinsic("__quantum__qis__s__body"), Vec::new()),
            StandardGate::Sdg => (Callee::Intrinsic("__quantum__qis__s__adj"), Vec::new()),
            StandardGate::T => (Callee::Intrinsic("__quantum__qis__t__body"), Vec::new()),
            StandardGate::Tdg => (Callee::Intrinsic("__quantum__qis__t__adj"), Vec::new()),
            StandardGate::SX => (
                Callee::Intrinsic("__quantum__qis__rx__body"),
                vec![ParameterExpression::from(FRAC_PI_2)],
            ),
            StandardGate::SXdg => (
                Callee::Intrinsic("__quantum__qis__rx__body"),
                vec![ParameterExpression::from(-FRAC_PI_2)],
            ),
            StandardGate::Rx(theta) => (
                Callee::Intrinsic("__quantum__qis__rx__body"),
                vec![theta.clone()],
            ),
            StandardGate::Ry(theta) => (
                Callee::Intrinsic("__quantum__qis__ry__body"),
                vec![theta.clone()],
            ),
            StandardGate::Rz(theta) => (
                Callee::Intrinsic("__quantum__qis__rz__body"),
                vec![theta.clone()],
            ),
            StandardGate::P(theta) => (
                Callee::Intrinsic("__quantum__qis__rz__body"),
                vec![theta.clone()],
            ),
            StandardGate::PRX(theta, phi) => (
                Callee::Helper("prx"),
                vec![theta.clone(), phi.clone(), -phi.clone()],
            ),
            StandardGate::CX => (Callee::Intrinsic("__quantum__qis__cnot__body"), Vec::new()),
            StandardGate::CY => (Callee::Helper("cy"), Vec::new()),
            StandardGate::CZ => (Callee::Intrinsic("__quantum__qis__cz__body"), Vec::new()),
            StandardGate::CP(theta) => (
                Callee::Helper("cp"),
                vec![theta.clone() / 2.0, -(theta.clone() / 2.0)],
            ),
            StandardGate::Swap => (Callee::Helper("swap"), Vec::new()),
            StandardGate::ISwap => (Callee::Helper("iswap"), Vec::new()),
            StandardGate::SISwap => (Callee::Helper("siswap"), Vec::new()),
            StandardGate::SISwapDg => (Callee::Helper("siswapdg"), Vec::new()),
            StandardGate::FSwap => (Callee::Helper("fswap"), Vec::new()),
            StandardGate::XY(theta) => (Callee::Helper("xy"), vec![-(theta.clone() / 2.0)]),
            StandardGate::RXX(theta) => (
                Callee::Helper("rxx"),
                vec![theta.clone() / 2.0, -(theta.clone() / 2.0)],
            ),
            StandardGate::RZZ(theta) => (
                Callee::Intrinsic("__quantum__qis__rzz__body"),
                vec![theta.clone()],
            ),
            StandardGate::PMExchange(theta) => (Callee::Helper("pmx"), vec![theta.clone()]),
            StandardGate::Givens(theta, phi) => (
                Callee::Helper("givens"),
                vec![-theta.clone(), phi.clone() + FRAC_PI_2],
            ),
            StandardGate::GivensLE(theta, phi) => (
                Callee::Helper("givens_le"),
                vec![-theta.clone(), phi.clone() + FRAC_PI_2],
            ),
            StandardGate::PhasedCZ(phi) => (Callee::Helper("phased_cz"), vec![phi.clone()]),
            StandardGate::PhasedCP(theta, phi) => (
                Callee::Helper("phased_cp"),
                vec![theta.clone() / 2.0, -(theta.clone() / 2.0), phi.clone()],
            ),
            StandardGate::CCX => (Callee::Intrinsic("__quantum__qis__ccx__body"), Vec::new()),
            StandardGate::CCZ => (Callee::Helper("ccz"), Vec::new()),
            StandardGate::CCP(theta) => (
                Callee::Helper("ccp"),
                vec![theta.clone() / 4.0, -(theta.clone() / 4.0)],
            ),
        };
        let symbol = match callee {
            Callee::Intrinsic(symbol) => {
                self.declare(symbol);
                symbol
            }
            Callee::Helper(helper) => {
                self.ensure_helper(helper);
                helper
            }
        };
        let mut operands = Vec::with_capacity(args.len() + qubits.len());
        for arg in &args {
            operands.push(self.angle_operand(name, arg, scope)?);
        }
        for qubit in qubits {
            operands.push(qubit_operand(scope, name, *qubit)?);
        }
        Ok(Some(format!(
            "  call void @{symbol}({})\n",
            operands.join(", ")
        )))
    }

    fn measure_line(
        &mut self,
        instruction: &Instruction,
        scope: Option<&DefinitionScope<'_>>,
    ) -> QirResult<String> {
        let qubit = *instruction.qubits.first().ok_or_else(|| {
            QirError::WrongQubitCount {
                gate: "measure".to_owned(),
                expected: 1,
                got: 0,
            }
        })?;
        let result = *instruction
            .clbits
            .first()
            .ok_or(QirError::MissingResultSlot {
                qubit: qubit.index(),
            })?;
        self.declare(MEASURE_SYMBOL);
        self.any_measures = true;
        self.uses_results = true;
        Ok(format!(
            "  call void @__quantum__qis__mz__body({}, %Result* inttoptr (i64 {} to %Result*)) #1\n",
            qubit_operand(scope, "measure", qubit)?,
            result.index()
        ))
    }

    fn reset_line(
        &mut self,
        instruction: &Instruction,
        scope: Option<&DefinitionScope<'_>>,
    ) -> QirResult<String> {
        let qubit = *instruction.qubits.first().ok_or_else(|| {
            QirError::WrongQubitCount {
                gate: "reset".to_owned(),
                expected: 1,
                got: 0,
            }
        })?;
        self.declare(RESET_SYMBOL);
        Ok(format!(
            "  call void @__quantum__qis__reset__body({})\n",
            qubit_operand(scope, "reset", qubit)?
        ))
    }

    fn append_measure_all(&mut self) {
        for qubit in 0..self.num_qubits {
            self.declare(MEASURE_SYMBOL);
            self.body.push_str(&format!(
                "  call void @__quantum__qis__mz__body(%Qubit* inttoptr (i64 {qubit} to %Qubit*), %Result* inttoptr (i64 {qubit} to %Result*)) #1\n"
            ));
            self.num_results = self.num_results.max(qubit + 1);
            self.main_measures = true;
            self.any_measures = true;
            self.uses_results = true;
        }
    }

    /// Renders an angle operand. Constants fold to a double literal;
    /// bare symbols are valid only inside a definition that declares
    /// them as parameters.
    fn angle_operand(
        &self,
        gate: &str,
        angle: &ParameterExpression,
        scope: Option<&DefinitionScope<'_>>,
    ) -> QirResult<String> {
        if let Some(value) = angle.as_f64() {
            return Ok(format!("double {}", format_double(value)));
        }
        if let (Some(scope), Some(symbol)) = (scope, angle.as_symbol()) {
            if scope.params.iter().any(|param| param == symbol) {
                return Ok(format!("double %{symbol}"));
            }
        }
        Err(QirError::UnboundParameter {
            gate: gate.to_owned(),
            parameter: angle.to_string(),
        })
    }

    fn declare(&mut self, symbol: &str) {
        if self.seen.insert(symbol.to_owned()) {
            if let Some(declaration) = qis_declaration(symbol) {
                self.declarations.push(declaration.to_owned());
            }
        }
    }

    fn ensure_helper(&mut self, name: &str) {
        if !self.seen.insert(name.to_owned()) {
            return;
        }
        if let Some(define) = helper_define(name) {
            for symbol in intrinsic_symbols(define) {
                self.declare(symbol);
            }
            self.declarations.push(format!("\n{define}\n"));
        }
    }

    fn note_qubits(&mut self, qubits: &[QubitId]) {
        for qubit in qubits {
            self.num_qubits = self.num_qubits.max(qubit.index() + 1);
        }
    }

    fn note_result(&mut self, clbit: ClbitId) {
        self.num_results = self.num_results.max(clbit.index() + 1);
    }

    fn next_var(&mut self) -> u32 {
        let var = self.vars;
        self.vars += 1;
        var
    }

    fn next_label(&mut self) -> u32 {
        let label = self.labels;
        self.labels += 1;
        label
    }

    fn assemble(&self, profile: &str, qir_version: (u32, u32)) -> String {
        let mut output = String::new();
        output.push_str(QUBIT_TYPE);
        output.push('\n');
        if self.uses_results {
            output.push_str(RESULT_TYPE);
            output.push('\n');
        }
        output.push_str("\ndefine void @main() #0 {\nentry:\n");
        output.push_str(&self.body);
        output.push_str("  ret void\n}\n\n");
        if !self.declarations.is_empty() {
            output.push_str(self.declarations.join("\n").trim());
            output.push_str("\n\n");
        }
        let irreversible = if self.main_measures {
            " \"irreversible\""
        } else {
            ""
        };
        output.push_str(&format!(
            "attributes #0 = {{ \"entry_point\" \"required_num_qubits\"=\"{}\" \"required_num_results\"=\"{}\" \"output_labeling_schema\" \"qir_profiles\"=\"{profile}\"{irreversible} }}\n",
            self.num_qubits, self.num_results,
        ));
        if self.any_measures {
            output.push_str("attributes #1 = { \"irreversible\" }\n");
        }
        let (major, minor) = qir_version;
        output.push_str("\n!llvm.module.flags = !{!0, !1, !2, !3}\n\n");
        output.push_str(&format!("!0 = !{{i32 1, !\"qir_major_version\", i32 {major}}}\n"));
        output.push_str(&format!("!1 = !{{i32 7, !\"qir_minor_version\", i32 {minor}}}\n"));
        output.push_str("!2 = !{i32 1, !\"dynamic_qubit_management\", i1 false}\n");
        output.push_str("!3 = !{i32 1, !\"dynamic_result_management\", i1 false}");
        output
    }
}

fn qubit_operand(
    scope: Option<&DefinitionScope<'_>>,
    gate: &str,
    qubit: QubitId,
) -> QirResult<String> {
    match scope {
        None => Ok(format!(
            "%Qubit* inttoptr (i64 {} to %Qubit*)",
            qubit.index()
        )),
        Some(scope) => {
            let label = scope.labels.get(qubit.index() as usize).ok_or_else(|| {
                QirError::UndeclaredQubit {
                    gate: gate.to_owned(),
                    qubit: qubit.index(),
                }
            })?;
            Ok(format!("%Qubit* %qubit{}", label.index()))
        }
    }
}

fn kind_name(kind: &InstructionKind) -> &str {
    match kind {
        InstructionKind::Gate(gate) => gate.name(),
        InstructionKind::Measure => "measure",
        InstructionKind::Reset => "reset",
        InstructionKind::Conditional { .. } => "conditional",
        InstructionKind::Repeat { .. } => "repeat",
        InstructionKind::GateDef(definition) => &definition.name,
        InstructionKind::GateCall { name, .. } => name,
    }
}
