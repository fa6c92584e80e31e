//! String-literal interning (§4.6): literals are deduplicated by their
//! verbatim quoted source text, matching the grounding source's
//! `create_string_literal` — two textually identical literals share a
//! label, but the dedup key is the raw token text, not a decoded value.

use super::Generator;

impl Generator {
    /// `value` is the AST's stored string text, quotes included (§3
    /// invariant). Returns the `str_N` label, reusing one if this exact
    /// quoted text was already interned.
    pub(crate) fn intern_string(&mut self, value: &str) -> String {
        if let Some(label) = self.string_literals.get(value) {
            return label.clone();
        }

        let label = format!("str_{}", self.string_counter);
        self.string_counter += 1;

        let clean = value.trim_matches('"').replace("\\n", "\", 10, \"").replace("\\\"", "\"");
        self.data_section.push(format!("    {label} db \"{clean}\", 0"));

        self.string_literals.insert(value.to_string(), label.clone());
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_literal_reuses_its_label() {
        let mut gen = Generator::new();
        let a = gen.intern_string("\"hi\"");
        let b = gen.intern_string("\"hi\"");
        assert_eq!(a, b);
        assert_eq!(gen.data_section.len(), 1);
    }

    #[test]
    fn embedded_newline_becomes_a_nasm_byte_splice() {
        let mut gen = Generator::new();
        gen.intern_string("\"a\\nb\"");
        assert!(gen.data_section[0].contains("\"a\", 10, \"b\""));
    }
}
