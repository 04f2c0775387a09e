use translit_core::{
    ConversionEntry, Converter, Direction, MappingSession, PlainTextField, TextField,
};

/// Builds a small but realistic translit-to-Cyrillic table: single letters,
/// multi-letter digraphs, and a special-cased apostrophe for the soft sign.
#[allow(dead_code)]
pub fn cyrillic_table() -> Vec<ConversionEntry> {
    let pairs = [
        ("shch", "щ"),
        ("sh", "ш"),
        ("ch", "ч"),
        ("zh", "ж"),
        ("yo", "ё"),
        ("yu", "ю"),
        ("ya", "я"),
        ("a", "а"),
        ("b", "б"),
        ("v", "в"),
        ("g", "г"),
        ("d", "д"),
        ("e", "е"),
        ("z", "з"),
        ("i", "и"),
        ("j", "й"),
        ("k", "к"),
        ("l", "л"),
        ("m", "м"),
        ("n", "н"),
        ("o", "о"),
        ("p", "п"),
        ("r", "р"),
        ("s", "с"),
        ("t", "т"),
        ("u", "у"),
        ("f", "ф"),
        ("h", "х"),
        ("c", "ц"),
        ("y", "ы"),
    ];

    let mut table: Vec<ConversionEntry> = pairs
        .iter()
        .map(|(source, target)| ConversionEntry::new(*source, *target))
        .collect();
    table.push(ConversionEntry::special("'", "ь"));
    table
}

#[allow(dead_code)]
pub fn cyrillic_converter() -> Converter {
    Converter::from_table(&cyrillic_table(), false, Direction::Forward)
}

/// Builds a converter straight from `(source, target)` pairs.
#[allow(dead_code)]
pub fn converter_from_pairs(pairs: &[(&str, &str)], case_sensitive: bool) -> Converter {
    let table: Vec<ConversionEntry> = pairs
        .iter()
        .map(|(source, target)| ConversionEntry::new(*source, *target))
        .collect();
    Converter::from_table(&table, case_sensitive, Direction::Forward)
}

/// Types `text` one char at a time through the session, applying each edit
/// to the field the way a host would.
#[allow(dead_code)]
pub fn type_text(
    converter: &Converter,
    field: &mut PlainTextField,
    session: &mut MappingSession,
    text: &str,
) {
    for c in text.chars() {
        let action = converter.process_next_char(&*field, session, c);
        field.apply_edit(&action);
    }
}
