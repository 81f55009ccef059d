//! Converts TeX-style math in axis labels (`$V(\phi)$`) into plain Unicode
//! text the font backend can draw (`V(φ)`).
//!
//! Only the parts between unescaped `$` pairs are converted; `\$` is a literal
//! dollar sign. Supported inside math: Greek letters, a handful of operators,
//! `_`/`^` scripts (digits, signs and a few letters), `\mathrm{..}` and
//! friends, and grouping braces.

const SYMBOLS: &[(&str, &str)] = &[
    ("alpha", "α"),
    ("beta", "β"),
    ("gamma", "γ"),
    ("delta", "δ"),
    ("epsilon", "ε"),
    ("varepsilon", "ε"),
    ("zeta", "ζ"),
    ("eta", "η"),
    ("theta", "θ"),
    ("vartheta", "ϑ"),
    ("iota", "ι"),
    ("kappa", "κ"),
    ("lambda", "λ"),
    ("mu", "μ"),
    ("nu", "ν"),
    ("xi", "ξ"),
    ("pi", "π"),
    ("rho", "ρ"),
    ("sigma", "σ"),
    ("tau", "τ"),
    ("upsilon", "υ"),
    ("phi", "φ"),
    ("varphi", "ϕ"),
    ("chi", "χ"),
    ("psi", "ψ"),
    ("omega", "ω"),
    ("Gamma", "Γ"),
    ("Delta", "Δ"),
    ("Theta", "Θ"),
    ("Lambda", "Λ"),
    ("Xi", "Ξ"),
    ("Pi", "Π"),
    ("Sigma", "Σ"),
    ("Upsilon", "Υ"),
    ("Phi", "Φ"),
    ("Psi", "Ψ"),
    ("Omega", "Ω"),
    ("infty", "∞"),
    ("partial", "∂"),
    ("nabla", "∇"),
    ("cdot", "·"),
    ("times", "×"),
    ("pm", "±"),
    ("mp", "∓"),
    ("leq", "≤"),
    ("le", "≤"),
    ("geq", "≥"),
    ("ge", "≥"),
    ("neq", "≠"),
    ("approx", "≈"),
    ("sim", "∼"),
    ("propto", "∝"),
    ("to", "→"),
    ("rightarrow", "→"),
    ("leftarrow", "←"),
    ("degree", "°"),
    ("circ", "∘"),
    ("hbar", "ħ"),
    ("ell", "ℓ"),
    ("langle", "⟨"),
    ("rangle", "⟩"),
];

/// Commands whose braced argument is kept as is.
const FONT_COMMANDS: &[&str] = &["mathrm", "mathit", "mathbf", "mathsf", "text", "textrm", "operatorname"];

/// Converts every `$..$` segment of `label` to Unicode.
pub fn to_unicode(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut math = String::new();
    let mut in_math = false;
    let mut chars = label.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'$') => {
                chars.next();
                if in_math {
                    math.push_str("\\$");
                } else {
                    out.push('$');
                }
            }
            '$' => {
                if in_math {
                    out.push_str(&convert_math(&math));
                    math.clear();
                }
                in_math = !in_math;
            }
            _ if in_math => math.push(c),
            _ => out.push(c),
        }
    }
    if in_math {
        // unbalanced, keep the text as written
        out.push('$');
        out.push_str(&math);
    }
    out
}

fn convert_math(src: &str) -> String {
    let chars: Vec<char> = src.chars().collect();
    let mut out = String::with_capacity(src.len());
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '\\' => {
                let start = i + 1;
                let mut end = start;
                while end < chars.len() && chars[end].is_ascii_alphabetic() {
                    end += 1;
                }
                if end == start {
                    // escaped single character, e.g. \{ or \%, or a spacing command
                    if let Some(&next) = chars.get(start) {
                        match next {
                            ',' | ';' | ':' | '!' | ' ' => {
                                if next != '!' {
                                    out.push(' ');
                                }
                            }
                            _ => out.push(next),
                        }
                    }
                    i = start + 1;
                    continue;
                }
                let name: String = chars[start..end].iter().collect();
                i = end;
                if FONT_COMMANDS.contains(&name.as_str()) {
                    let (group, next) = take_group(&chars, i);
                    out.push_str(&convert_math(&group));
                    i = next;
                } else if let Some(symbol) = lookup(&name) {
                    out.push_str(symbol);
                } else if name == "quad" || name == "qquad" {
                    out.push_str("  ");
                } else {
                    out.push('\\');
                    out.push_str(&name);
                }
            }
            c @ '_' | c @ '^' => {
                let (group, next) = take_group(&chars, i + 1);
                let converted = convert_math(&group);
                let script: Option<String> = converted
                    .chars()
                    .map(|ch| if c == '^' { superscript(ch) } else { subscript(ch) })
                    .collect();
                match script {
                    Some(s) => out.push_str(&s),
                    None => {
                        out.push(c);
                        out.push_str(&converted);
                    }
                }
                i = next;
            }
            '{' | '}' => i += 1,
            c => {
                out.push(c);
                i += 1;
            }
        }
    }
    out
}

fn lookup(name: &str) -> Option<&'static str> {
    SYMBOLS.iter().find(|(n, _)| *n == name).map(|(_, s)| *s)
}

/// Reads a braced group or a single token starting at `pos`.
/// Returns the group content and the index after it.
fn take_group(chars: &[char], pos: usize) -> (String, usize) {
    let mut i = pos;
    while i < chars.len() && chars[i] == ' ' {
        i += 1;
    }
    match chars.get(i) {
        Some('{') => {
            let mut depth = 0;
            let mut end = i;
            while end < chars.len() {
                match chars[end] {
                    '{' => depth += 1,
                    '}' => {
                        depth -= 1;
                        if depth == 0 {
                            break;
                        }
                    }
                    _ => {}
                }
                end += 1;
            }
            let inner: String = chars[i + 1..end.min(chars.len())].iter().collect();
            (inner, (end + 1).min(chars.len()))
        }
        Some('\\') => {
            let mut end = i + 1;
            while end < chars.len() && chars[end].is_ascii_alphabetic() {
                end += 1;
            }
            (chars[i..end].iter().collect(), end)
        }
        Some(&c) => (c.to_string(), i + 1),
        None => (String::new(), i),
    }
}

fn superscript(c: char) -> Option<char> {
    Some(match c {
        '0' => '⁰',
        '1' => '¹',
        '2' => '²',
        '3' => '³',
        '4' => '⁴',
        '5' => '⁵',
        '6' => '⁶',
        '7' => '⁷',
        '8' => '⁸',
        '9' => '⁹',
        '+' => '⁺',
        '-' | '−' => '⁻',
        '=' => '⁼',
        '(' => '⁽',
        ')' => '⁾',
        'n' => 'ⁿ',
        'i' => 'ⁱ',
        _ => return None,
    })
}

fn subscript(c: char) -> Option<char> {
    Some(match c {
        '0' => '₀',
        '1' => '₁',
        '2' => '₂',
        '3' => '₃',
        '4' => '₄',
        '5' => '₅',
        '6' => '₆',
        '7' => '₇',
        '8' => '₈',
        '9' => '₉',
        '+' => '₊',
        '-' | '−' => '₋',
        '=' => '₌',
        '(' => '₍',
        ')' => '₎',
        'a' => 'ₐ',
        'e' => 'ₑ',
        'i' => 'ᵢ',
        'j' => 'ⱼ',
        'n' => 'ₙ',
        'x' => 'ₓ',
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_axis_labels() {
        assert_eq!(to_unicode(r"$\phi$"), "φ");
        assert_eq!(to_unicode(r"$V(\phi)$"), "V(φ)");
    }

    #[test]
    fn test_plain_text_is_untouched() {
        assert_eq!(to_unicode("weight [kg]"), "weight [kg]");
        assert_eq!(to_unicode(r"cost in \$"), "cost in $");
    }

    #[test]
    fn test_mixed_text_and_math() {
        assert_eq!(to_unicode(r"energy $E_0$ at $T = 10^{-3}$ K"), "energy E₀ at T = 10⁻³ K");
    }

    #[test]
    fn test_scripts_without_unicode_form_stay_readable() {
        assert_eq!(to_unicode(r"$x_{max}$"), "x_max");
        assert_eq!(to_unicode(r"$\phi_{1p}$"), "φ_1p");
        assert_eq!(to_unicode(r"$\phi_{1n}$"), "φ₁ₙ");
    }

    #[test]
    fn test_font_commands_and_spacing() {
        assert_eq!(to_unicode(r"$\mathrm{d}\phi / \mathrm{d}t$"), "dφ / dt");
        assert_eq!(to_unicode(r"$a\,b$"), "a b");
    }

    #[test]
    fn test_unknown_command_and_unbalanced() {
        assert_eq!(to_unicode(r"$\foo$"), r"\foo");
        assert_eq!(to_unicode(r"price $5"), "price $5");
    }
}
