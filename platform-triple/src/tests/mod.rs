use platform_triple_schema::Triple;

mod darwin;
mod environment;
mod module_triple;
mod names;

fn triple(s: &str) -> Triple {
    s.parse().unwrap()
}

fn known_darwin_triples() -> impl Iterator<Item = Triple> {
    crate::platforms::KNOWN_DARWIN_TRIPLES
        .iter()
        .map(|s| triple(s))
}
