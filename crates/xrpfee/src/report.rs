use xrpfee_core::units::{drops_to_xrp, drops_to_xrp_strict};
use xrpfee_core::{CoreError, FeeDetails, FeeKind};

/// Render the four-line fee report. Unparseable values are shown as
/// `0.000000` XRP next to the raw string the node sent.
pub fn render(fee: &FeeDetails) -> String {
    FeeKind::ALL
        .iter()
        .map(|&kind| {
            let drops = fee.drops(kind);
            line(kind, drops, &drops_to_xrp(drops))
        })
        .collect()
}

/// Like [`render`], but fails on the first fee value that is not a
/// non-negative whole number of drops.
pub fn render_strict(fee: &FeeDetails) -> Result<String, CoreError> {
    FeeKind::ALL
        .iter()
        .map(|&kind| {
            let drops = fee.drops(kind);
            Ok(line(kind, drops, &drops_to_xrp_strict(drops)?))
        })
        .collect()
}

fn line(kind: FeeKind, drops: &str, xrp: &str) -> String {
    format!("{}: {drops} drops (~ {xrp} XRP)\n", kind.label())
}
