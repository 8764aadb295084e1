use regionpath_core::NodeId;

pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }
    formatted
}

/// Two decimals, or "N/A" for an unreachable goal
pub fn format_cost(cost: Option<f64>) -> String {
    match cost {
        Some(cost) => format!("{cost:.2}"),
        None => "N/A".to_string(),
    }
}

pub fn format_bytes(bytes: Option<u64>) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];

    let Some(bytes) = bytes else {
        return "n/a".to_string();
    };

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}

pub fn format_path(nodes: &[NodeId]) -> String {
    let joined = nodes
        .iter()
        .map(NodeId::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}
