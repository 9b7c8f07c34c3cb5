//! QIS declarations and helper gate definitions.
//!
//! The base profile expresses every instruction as a call to a
//! `__quantum__qis__*` intrinsic or to a helper function defined inside
//! the emitted module. This module holds the `declare` line for each
//! intrinsic and the `define` blocks for gates that lower to helper
//! functions built from `rx`/`ry`/`rz`/`cnot` primitives.

/// Opaque type declaration for qubit pointers.
pub(crate) const QUBIT_TYPE: &str = "%Qubit = type opaque";

/// Opaque type declaration for result pointers. Only emitted when the
/// module measures a qubit or reads a result back.
pub(crate) const RESULT_TYPE: &str = "%Result = type opaque";

pub(crate) const MEASURE_SYMBOL: &str = "__quantum__qis__mz__body";
pub(crate) const READ_RESULT_SYMBOL: &str = "__quantum__qis__read_result__body";
pub(crate) const RESET_SYMBOL: &str = "__quantum__qis__reset__body";

/// Returns the `declare` line for a known QIS intrinsic symbol.
pub(crate) fn qis_declaration(symbol: &str) -> Option<&'static str> {
    let declaration = match symbol {
        "__quantum__qis__x__body" => "declare void @__quantum__qis__x__body(%Qubit*)",
        "__quantum__qis__y__body" => "declare void @__quantum__qis__y__body(%Qubit*)",
        "__quantum__qis__z__body" => "declare void @__quantum__qis__z__body(%Qubit*)",
        "__quantum__qis__h__body" => "declare void @__quantum__qis__h__body(%Qubit*)",
        "__quantum__qis__s__body" => "declare void @__quantum__qis__s__body(%Qubit*)",
        "__quantum__qis__s__adj" => "declare void @__quantum__qis__s__adj(%Qubit*)",
        "__quantum__qis__t__body" => "declare void @__quantum__qis__t__body(%Qubit*)",
        "__quantum__qis__t__adj" => "declare void @__quantum__qis__t__adj(%Qubit*)",
        "__quantum__qis__rx__body" => "declare void @__quantum__qis__rx__body(double, %Qubit*)",
        "__quantum__qis__ry__body" => "declare void @__quantum__qis__ry__body(double, %Qubit*)",
        "__quantum__qis__rz__body" => "declare void @__quantum__qis__rz__body(double, %Qubit*)",
        "__quantum__qis__cnot__body" => "declare void @__quantum__qis__cnot__body(%Qubit*, %Qubit*)",
        "__quantum__qis__cz__body" => "declare void @__quantum__qis__cz__body(%Qubit*, %Qubit*)",
        "__quantum__qis__rzz__body" => {
            "declare void @__quantum__qis__rzz__body(double, %Qubit*, %Qubit*)"
        }
        "__quantum__qis__ccx__body" => {
            "declare void @__quantum__qis__ccx__body(%Qubit*, %Qubit*, %Qubit*)"
        }
        "__quantum__qis__reset__body" => "declare void @__quantum__qis__reset__body(%Qubit*)",
        "__quantum__qis__mz__body" => {
            "declare void @__quantum__qis__mz__body(%Qubit*, %Result* writeonly) #1"
        }
        "__quantum__qis__read_result__body" => {
            "declare i1 @__quantum__qis__read_result__body(%Result*)"
        }
        _ => return None,
    };
    Some(declaration)
}

/// Returns the `define` block for a helper gate, without surrounding
/// blank lines. The intrinsics a body calls are declared separately, in
/// order of first appearance (see [`intrinsic_symbols`]).
pub(crate) fn helper_define(name: &str) -> Option<&'static str> {
    let define = match name {
        "swap" => SWAP_DEFINE,
        "iswap" => ISWAP_DEFINE,
        "siswap" => SISWAP_DEFINE,
        "siswapdg" => SISWAPDG_DEFINE,
        "fswap" => FSWAP_DEFINE,
        "xy" => XY_DEFINE,
        "rxx" => RXX_DEFINE,
        "cy" => CY_DEFINE,
        "cp" => CP_DEFINE,
        "phased_cz" => PHASED_CZ_DEFINE,
        "phased_cp" => PHASED_CP_DEFINE,
        "pmx" => PMX_DEFINE,
        "givens" => GIVENS_DEFINE,
        "givens_le" => GIVENS_LE_DEFINE,
        "prx" => PRX_DEFINE,
        "ccz" => CCZ_DEFINE,
        "ccp" => CCP_DEFINE,
        _ => return None,
    };
    Some(define)
}

/// Collects the `@__quantum__*` symbols called in a function body, in
/// order of first appearance.
pub(crate) fn intrinsic_symbols(body: &str) -> Vec<&str> {
    let mut symbols: Vec<&str> = Vec::new();
    for line in body.lines() {
        let Some(at) = line.find("@__quantum__") else {
            continue;
        };
        let rest = &line[at + 1..];
        let symbol = match rest.find('(') {
            Some(paren) => &rest[..paren],
            None => rest,
        };
        if !symbols.contains(&symbol) {
            symbols.push(symbol);
        }
    }
    symbols
}

/// Formats an angle as an LLVM double literal. Values that would print
/// as integers keep a trailing `.0` so the literal stays a double.
pub(crate) fn format_double(value: f64) -> String {
    let mut text = format!("{value}");
    if !text.contains('.') && !text.contains('e') && !text.contains("inf") && !text.contains("NaN")
    {
        text.push_str(".0");
    }
    text
}

const SWAP_DEFINE: &str = "define void @swap(%Qubit* %qubit0, %Qubit* %qubit1) {
entry:
  call void @__quantum__qis__cnot__body(%Qubit* %qubit0, %Qubit* %qubit1)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit1, %Qubit* %qubit0)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit0, %Qubit* %qubit1)
  ret void
}";

const ISWAP_DEFINE: &str = "define void @iswap(%Qubit* %qubit0, %Qubit* %qubit1) {
entry:
  call void @__quantum__qis__rx__body(double 1.5707963267948966, %Qubit* %qubit0)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit0, %Qubit* %qubit1)
  call void @__quantum__qis__rx__body(double -1.5707963267948966, %Qubit* %qubit0)
  call void @__quantum__qis__ry__body(double -1.5707963267948966, %Qubit* %qubit1)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit0, %Qubit* %qubit1)
  call void @__quantum__qis__rx__body(double -1.5707963267948966, %Qubit* %qubit0)
  ret void
}";

const SISWAP_DEFINE: &str = "define void @siswap(%Qubit* %qubit0, %Qubit* %qubit1) {
entry:
  call void @__quantum__qis__rx__body(double 1.5707963267948966, %Qubit* %qubit0)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit0, %Qubit* %qubit1)
  call void @__quantum__qis__rx__body(double -0.7853981633974483, %Qubit* %qubit0)
  call void @__quantum__qis__ry__body(double -0.7853981633974483, %Qubit* %qubit1)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit0, %Qubit* %qubit1)
  call void @__quantum__qis__rx__body(double -1.5707963267948966, %Qubit* %qubit0)
  ret void
}";

const SISWAPDG_DEFINE: &str = "define void @siswapdg(%Qubit* %qubit0, %Qubit* %qubit1) {
entry:
  call void @__quantum__qis__rx__body(double 1.5707963267948966, %Qubit* %qubit0)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit0, %Qubit* %qubit1)
  call void @__quantum__qis__rx__body(double 0.7853981633974483, %Qubit* %qubit0)
  call void @__quantum__qis__ry__body(double 0.7853981633974483, %Qubit* %qubit1)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit0, %Qubit* %qubit1)
  call void @__quantum__qis__rx__body(double -1.5707963267948966, %Qubit* %qubit0)
  ret void
}";

const FSWAP_DEFINE: &str = "define void @fswap(%Qubit* %qubit0, %Qubit* %qubit1) {
entry:
  call void @__quantum__qis__rz__body(double -1.5707963267948966, %Qubit* %qubit0)
  call void @__quantum__qis__rz__body(double -1.5707963267948966, %Qubit* %qubit1)
  call void @__quantum__qis__rx__body(double 1.5707963267948966, %Qubit* %qubit0)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit0, %Qubit* %qubit1)
  call void @__quantum__qis__rx__body(double -1.5707963267948966, %Qubit* %qubit0)
  call void @__quantum__qis__ry__body(double -1.5707963267948966, %Qubit* %qubit1)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit0, %Qubit* %qubit1)
  call void @__quantum__qis__rx__body(double -1.5707963267948966, %Qubit* %qubit0)
  ret void
}";

const XY_DEFINE: &str = "define void @xy(double %theta, %Qubit* %qubit0, %Qubit* %qubit1) {
entry:
  call void @__quantum__qis__rx__body(double 1.5707963267948966, %Qubit* %qubit0)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit0, %Qubit* %qubit1)
  call void @__quantum__qis__rx__body(double %theta, %Qubit* %qubit1)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit0, %Qubit* %qubit1)
  call void @__quantum__qis__rx__body(double -1.5707963267948966, %Qubit* %qubit0)
  ret void
}";

const RXX_DEFINE: &str =
    "define void @rxx(double %half_theta, double %minus_half_theta, %Qubit* %qubit0, %Qubit* %qubit1) {
entry:
  call void @__quantum__qis__rx__body(double %half_theta, %Qubit* %qubit0)
  call void @__quantum__qis__rx__body(double %half_theta, %Qubit* %qubit1)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit0, %Qubit* %qubit1)
  call void @__quantum__qis__rx__body(double %minus_half_theta, %Qubit* %qubit0)
  call void @__quantum__qis__rx__body(double %minus_half_theta, %Qubit* %qubit1)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit0, %Qubit* %qubit1)
  ret void
}";

const CY_DEFINE: &str = "define void @cy(%Qubit* %qubit0, %Qubit* %qubit1) {
entry:
  call void @__quantum__qis__s__adj(%Qubit* %qubit1)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit0, %Qubit* %qubit1)
  call void @__quantum__qis__s__body(%Qubit* %qubit1)
  ret void
}";

const CP_DEFINE: &str =
    "define void @cp(double %half_theta, double %minus_half_theta, %Qubit* %qubit0, %Qubit* %qubit1) {
entry:
  call void @__quantum__qis__rz__body(double %half_theta, %Qubit* %qubit0)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit0, %Qubit* %qubit1)
  call void @__quantum__qis__rz__body(double %minus_half_theta, %Qubit* %qubit1)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit0, %Qubit* %qubit1)
  call void @__quantum__qis__rz__body(double %half_theta, %Qubit* %qubit1)
  ret void
}";

const PHASED_CZ_DEFINE: &str =
    "define void @phased_cz(double %phi, %Qubit* %qubit0, %Qubit* %qubit1) {
entry:
  call void @__quantum__qis__rz__body(double 1.5707963267948966, %Qubit* %qubit0)
  call void @__quantum__qis__rz__body(double 1.5707963267948966, %Qubit* %qubit1)
  call void @__quantum__qis__ry__body(double 1.5707963267948966, %Qubit* %qubit1)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit0, %Qubit* %qubit1)
  call void @__quantum__qis__rx__body(double -1.5707963267948966, %Qubit* %qubit1)
  call void @__quantum__qis__rz__body(double -1.5707963267948966, %Qubit* %qubit0)
  call void @__quantum__qis__ry__body(double -1.5707963267948966, %Qubit* %qubit1)
  call void @__quantum__qis__rz__body(double %phi, %Qubit* %qubit0)
  call void @__quantum__qis__rz__body(double %phi, %Qubit* %qubit1)
  ret void
}";

const PHASED_CP_DEFINE: &str =
    "define void @phased_cp(double %half_theta, double %minus_half_theta, double %phi, %Qubit* %qubit0, %Qubit* %qubit1) {
entry:
  call void @__quantum__qis__rz__body(double %half_theta, %Qubit* %qubit0)
  call void @__quantum__qis__rz__body(double %half_theta, %Qubit* %qubit1)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit0, %Qubit* %qubit1)
  call void @__quantum__qis__rz__body(double %minus_half_theta, %Qubit* %qubit1)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit0, %Qubit* %qubit1)
  call void @__quantum__qis__rz__body(double %phi, %Qubit* %qubit0)
  call void @__quantum__qis__rz__body(double %phi, %Qubit* %qubit1)
  ret void
}";

const PMX_DEFINE: &str = "define void @pmx(double %theta, %Qubit* %qubit0, %Qubit* %qubit1) {
entry:
  call void @__quantum__qis__rx__body(double 1.5707963267948966, %Qubit* %qubit0)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit0, %Qubit* %qubit1)
  call void @__quantum__qis__rx__body(double %theta, %Qubit* %qubit0)
  call void @__quantum__qis__ry__body(double %theta, %Qubit* %qubit1)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit0, %Qubit* %qubit1)
  call void @__quantum__qis__rx__body(double -1.5707963267948966, %Qubit* %qubit0)
  ret void
}";

const GIVENS_DEFINE: &str =
    "define void @givens(double %minus_theta, double %shifted_phi, %Qubit* %qubit0, %Qubit* %qubit1) {
entry:
  call void @__quantum__qis__rz__body(double %shifted_phi, %Qubit* %qubit1)
  call void @__quantum__qis__rx__body(double 1.5707963267948966, %Qubit* %qubit0)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit0, %Qubit* %qubit1)
  call void @__quantum__qis__rx__body(double %minus_theta, %Qubit* %qubit0)
  call void @__quantum__qis__ry__body(double %minus_theta, %Qubit* %qubit1)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit0, %Qubit* %qubit1)
  call void @__quantum__qis__rx__body(double -1.5707963267948966, %Qubit* %qubit0)
  call void @__quantum__qis__rz__body(double -1.5707963267948966, %Qubit* %qubit1)
  ret void
}";

const GIVENS_LE_DEFINE: &str =
    "define void @givens_le(double %minus_theta, double %shifted_phi, %Qubit* %qubit0, %Qubit* %qubit1) {
entry:
  call void @__quantum__qis__rz__body(double -1.5707963267948966, %Qubit* %qubit0)
  call void @__quantum__qis__rx__body(double 1.5707963267948966, %Qubit* %qubit0)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit0, %Qubit* %qubit1)
  call void @__quantum__qis__rx__body(double %minus_theta, %Qubit* %qubit0)
  call void @__quantum__qis__ry__body(double %minus_theta, %Qubit* %qubit1)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit0, %Qubit* %qubit1)
  call void @__quantum__qis__rx__body(double -1.5707963267948966, %Qubit* %qubit0)
  call void @__quantum__qis__rz__body(double %shifted_phi, %Qubit* %qubit0)
  ret void
}";

const PRX_DEFINE: &str =
    "define void @prx(double %theta, double %phi, double %minus_phi, %Qubit* %qubit0) {
entry:
  call void @__quantum__qis__rz__body(double %minus_phi, %Qubit* %qubit0)
  call void @__quantum__qis__rx__body(double %theta, %Qubit* %qubit0)
  call void @__quantum__qis__rz__body(double %phi, %Qubit* %qubit0)
  ret void
}";

const CCZ_DEFINE: &str = "define void @ccz(%Qubit* %qubit0, %Qubit* %qubit1, %Qubit* %qubit2) {
entry:
  call void @__quantum__qis__rz__body(double 0.7853981633974483, %Qubit* %qubit1)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit1, %Qubit* %qubit2)
  call void @__quantum__qis__rz__body(double -0.7853981633974483, %Qubit* %qubit2)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit1, %Qubit* %qubit2)
  call void @__quantum__qis__rz__body(double 0.7853981633974483, %Qubit* %qubit2)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit0, %Qubit* %qubit1)
  call void @__quantum__qis__rz__body(double -0.7853981633974483, %Qubit* %qubit1)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit1, %Qubit* %qubit2)
  call void @__quantum__qis__rz__body(double 0.7853981633974483, %Qubit* %qubit2)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit1, %Qubit* %qubit2)
  call void @__quantum__qis__rz__body(double -0.7853981633974483, %Qubit* %qubit2)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit0, %Qubit* %qubit1)
  call void @__quantum__qis__rz__body(double 0.7853981633974483, %Qubit* %qubit0)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit0, %Qubit* %qubit2)
  call void @__quantum__qis__rz__body(double -0.7853981633974483, %Qubit* %qubit2)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit0, %Qubit* %qubit2)
  call void @__quantum__qis__rz__body(double 0.7853981633974483, %Qubit* %qubit2)
  ret void
}";

const CCP_DEFINE: &str =
    "define void @ccp(double %quarter_theta, double %minus_quarter_theta, %Qubit* %qubit0, %Qubit* %qubit1, %Qubit* %qubit2) {
entry:
  call void @__quantum__qis__rz__body(double %quarter_theta, %Qubit* %qubit1)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit1, %Qubit* %qubit2)
  call void @__quantum__qis__rz__body(double %minus_quarter_theta, %Qubit* %qubit2)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit1, %Qubit* %qubit2)
  call void @__quantum__qis__rz__body(double %quarter_theta, %Qubit* %qubit2)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit0, %Qubit* %qubit1)
  call void @__quantum__qis__rz__body(double %minus_quarter_theta, %Qubit* %qubit1)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit1, %Qubit* %qubit2)
  call void @__quantum__qis__rz__body(double %quarter_theta, %Qubit* %qubit2)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit1, %Qubit* %qubit2)
  call void @__quantum__qis__rz__body(double %minus_quarter_theta, %Qubit* %qubit2)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit0, %Qubit* %qubit1)
  call void @__quantum__qis__rz__body(double %quarter_theta, %Qubit* %qubit0)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit0, %Qubit* %qubit2)
  call void @__quantum__qis__rz__body(double %minus_quarter_theta, %Qubit* %qubit2)
  call void @__quantum__qis__cnot__body(%Qubit* %qubit0, %Qubit* %qubit2)
  call void @__quantum__qis__rz__body(double %quarter_theta, %Qubit* %qubit2)
  ret void
}";
