use graphpeek_core::internal::*;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayParams {
    pub json: bool,
}

impl DisplayParams {
    /// Report as printed on stdout: one `-->` line per row, or a JSON array.
    pub fn render(&self, report: &IntrospectionReport) -> PeekResult<String> {
        if self.json {
            let mut s = serde_json::to_string_pretty(report).context("Serializing report")?;
            s.push('\n');
            Ok(s)
        } else {
            Ok(report.to_string())
        }
    }
}
