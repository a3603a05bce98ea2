#[derive(Debug, Default)]
pub struct CheckReport {
    pub passed: Vec<String>,
    pub failures: Vec<String>,
    pub warnings: Vec<String>,
}

impl CheckReport {
    pub fn total(&self) -> usize {
        self.passed.len() + self.failures.len()
    }

    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn print_summary(&self) {
        if self.is_valid() {
            println!("✅ All {} payloads passed checks", self.total());
        } else {
            println!("❌ {} of {} payloads failed checks", self.failures.len(), self.total());
        }

        if !self.warnings.is_empty() {
            println!("⚠️ {} warnings found", self.warnings.len());
        }

        for source in &self.passed {
            println!("   ✅ {}", source);
        }

        for failure in &self.failures {
            println!("   ❌ {}", failure);
        }

        for warning in &self.warnings {
            println!("   ⚠️ {}", warning);
        }
    }
}
