use crate::openrouter::{MODELS, Model, default_model};

pub fn listing(active: &Model) -> String {
    MODELS
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let marker = if m == active { "*" } else { " " };
            format!("{} {}. {} ({})\n", marker, i + 1, m.name, m.id)
        })
        .collect()
}

pub fn run() {
    print!("{}", listing(default_model()));
}
