use prometheus::{IntCounter, Registry};

pub struct Metrics {
    pub files_repaired: IntCounter,
    pub replacements_applied: IntCounter,
}

impl Metrics {
    pub fn new(registry: &Registry) -> Self {
        let files_repaired =
            IntCounter::new("files_repaired", "Files rewritten in place").unwrap();
        let replacements_applied = IntCounter::new(
            "replacements_applied",
            "Individual substitutions performed",
        )
        .unwrap();
        registry.register(Box::new(files_repaired.clone())).unwrap();
        registry
            .register(Box::new(replacements_applied.clone()))
            .unwrap();
        Self {
            files_repaired,
            replacements_applied,
        }
    }
}
