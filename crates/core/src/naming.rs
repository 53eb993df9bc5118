//! Prompt filename to component name resolution.
//!
//! Known design-package files map to hand-picked component names. Anything else is
//! normalized by stripping the extension, dropping word separators and upper-casing
//! the first character. Two different files may normalize to the same name; no
//! attempt is made to disambiguate them, so the later one overwrites the earlier
//! output within a run.

/// Extension carried by prompt documents.
pub const PROMPT_EXTENSION: &str = ".md";

/// Known prompt filenames and the component names they produce.
///
/// Lookups are case-sensitive and include the extension.
pub const KNOWN_COMPONENTS: &[(&str, &str)] = &[
    ("hero.md", "Hero"),
    ("navbar.md", "Navbar"),
    ("navigation.md", "Navigation"),
    ("features.md", "Features"),
    ("features-grid.md", "FeaturesGrid"),
    ("pricing.md", "Pricing"),
    ("pricing-table.md", "PricingTable"),
    ("testimonials.md", "Testimonials"),
    ("faq.md", "Faq"),
    ("cta.md", "CallToAction"),
    ("cta-section.md", "CallToAction"),
    ("contact-form.md", "ContactForm"),
    ("footer.md", "Footer"),
    ("dashboard.md", "Dashboard"),
    ("login.md", "LoginForm"),
];

const WORD_SEPARATORS: [char; 3] = ['-', '_', ' '];

/// Resolve the component name for a prompt filename.
pub fn resolve_component_name(filename: &str) -> String {
    KNOWN_COMPONENTS
        .iter()
        .find(|(known, _)| *known == filename)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| derive_component_name(filename))
}

/// Derive a component name for a filename that is not in [`KNOWN_COMPONENTS`].
///
/// `random-section.md` becomes `Randomsection`.
pub fn derive_component_name(filename: &str) -> String {
    let stem = filename
        .strip_suffix(PROMPT_EXTENSION)
        .unwrap_or(filename);

    let joined: String = stem
        .chars()
        .filter(|c| !WORD_SEPARATORS.contains(c))
        .collect();

    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Failure message for a filename that resolves to an empty component name.
///
/// Stems made only of word separators (`-.md`, `_ .md`) have nothing left to name
/// the component after, and would otherwise produce a hidden `.tsx` file.
pub fn unresolved_name_message(filename: &str) -> String {
    format!("Cannot derive a component name from {filename}")
}

/// Output filename for a component, e.g. `Hero.tsx`.
pub fn output_filename(component: &str, extension: &str) -> String {
    let extension = extension.trim_start_matches('.');
    if extension.is_empty() {
        component.to_string()
    } else {
        format!("{component}.{extension}")
    }
}
