/// Aligns `label  value` pairs on the widest label.
pub fn two_column(entries: &[(&str, String)]) -> Vec<String> {
    let label_width = entries
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    entries
        .iter()
        .map(|(label, value)| format!("  {label:<label_width$}  {value}"))
        .collect()
}

pub fn print_two_column(entries: &[(&str, String)]) {
    for line in two_column(entries) {
        println!("{line}");
    }
}
