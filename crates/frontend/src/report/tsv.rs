//! Tab-separated text for the clipboard. Cells go out verbatim.
use super::table::ReportSnapshot;

pub fn build_tsv(snapshot: &ReportSnapshot) -> String {
    let mut text = String::new();
    text.push_str(&snapshot.headers.join("\t"));
    text.push('\n');
    for row in &snapshot.rows {
        text.push_str(&row.cells.join("\t"));
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::table::StaticTable;

    #[test]
    fn test_build_tsv() {
        let snapshot = ReportSnapshot::capture(
            &StaticTable::new(&["Bidhaa", "Stock"])
                .row(&["Sugar, white", "120"])
                .hidden_row(&["Rice", "8"])
                .row(&["Salt", "0", "ignored"]),
        );
        assert_eq!(
            build_tsv(&snapshot),
            "Bidhaa\tStock\nSugar, white\t120\nSalt\t0\n"
        );
    }
}
