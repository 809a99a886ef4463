//! Regular paradigms and the spelling rules applied on top of them.
//!
//! Rows are always six slots wide in the order 1sg, 2sg, 3sg, 1pl, 2pl, 3pl
//! (see [`super::types::slot`]).

use super::types::Tense;

/// Conjugation class, determined by the infinitive ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VerbClass {
    Ar,
    Er,
    Ir,
}

/// Vowel alternation in the stressed stem syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StemChange {
    /// pensar → pienso
    EIe,
    /// contar → cuento
    OUe,
    /// jugar → juego
    UUe,
    /// pedir → pido
    EI,
}

/// A fully realized paradigm for the three tenses we generate.
#[derive(Debug, Clone)]
pub(crate) struct Paradigm {
    pub preterite: [String; 6],
    pub present: [String; 6],
    pub future: [String; 6],
}

impl Paradigm {
    pub fn row(&self, tense: Tense) -> &[String; 6] {
        match tense {
            Tense::Preterite => &self.preterite,
            Tense::Present => &self.present,
            Tense::Future => &self.future,
        }
    }
}

const FUTURE_ENDINGS: [&str; 6] = ["é", "ás", "á", "emos", "éis", "án"];

/// Split an infinitive into its stem and class.
///
/// Accented -ír (reír, oír) is the -ir class. Returns `None` when the verb
/// does not end in -ar/-er/-ir or the stem is empty.
pub(crate) fn split_infinitive(verb: &str) -> Option<(&str, VerbClass)> {
    let class = if verb.ends_with("ar") {
        VerbClass::Ar
    } else if verb.ends_with("er") {
        VerbClass::Er
    } else if verb.ends_with("ir") || verb.ends_with("ír") {
        VerbClass::Ir
    } else {
        return None;
    };
    // "ír" is three bytes
    let ending = if verb.ends_with("ír") { "ír".len() } else { 2 };
    let stem = &verb[..verb.len() - ending];
    if stem.is_empty() {
        None
    } else {
        Some((stem, class))
    }
}

pub(crate) fn is_vowel(c: char) -> bool {
    matches!(
        c,
        'a' | 'e' | 'i' | 'o' | 'u' | 'á' | 'é' | 'í' | 'ó' | 'ú' | 'ü'
    )
}

/// Replace the last occurrence of `from` in `stem` with `to`.
fn replace_last(stem: &str, from: char, to: &str) -> String {
    match stem.rfind(from) {
        Some(idx) => format!("{}{}{}", &stem[..idx], to, &stem[idx + from.len_utf8()..]),
        None => stem.to_string(),
    }
}

fn stressed_stem(stem: &str, change: StemChange) -> String {
    match change {
        StemChange::EIe => replace_last(stem, 'e', "ie"),
        StemChange::OUe => replace_last(stem, 'o', "ue"),
        StemChange::UUe => replace_last(stem, 'u', "ue"),
        StemChange::EI => replace_last(stem, 'e', "i"),
    }
}

/// -ir stem changers also raise the vowel in the 3rd-person preterite.
fn raised_preterite_stem(stem: &str, class: VerbClass, change: Option<StemChange>) -> String {
    match (class, change) {
        (VerbClass::Ir, Some(StemChange::EIe | StemChange::EI)) => replace_last(stem, 'e', "i"),
        (VerbClass::Ir, Some(StemChange::OUe)) => replace_last(stem, 'o', "u"),
        _ => stem.to_string(),
    }
}

/// Spelling change for the 1sg present ending in -o.
fn first_singular_present_stem(stem: &str, class: VerbClass) -> String {
    if class == VerbClass::Ar {
        return stem.to_string();
    }
    if class == VerbClass::Ir && stem.ends_with("gu") {
        // seguir → sigo
        return stem[..stem.len() - 1].to_string();
    }
    if let Some(base) = stem.strip_suffix('g') {
        // escoger → escojo
        return format!("{}j", base);
    }
    if let Some(base) = stem.strip_suffix('c') {
        // conocer → conozco, vencer → venzo
        return match base.chars().last() {
            Some(c) if is_vowel(c) => format!("{}zc", base),
            _ => format!("{}z", base),
        };
    }
    stem.to_string()
}

/// Spelling change for the -ar 1sg preterite ending in -é.
fn first_singular_preterite_stem(stem: &str) -> String {
    if let Some(base) = stem.strip_suffix("gu") {
        // averiguar → averigüé
        format!("{}gü", base)
    } else if let Some(base) = stem.strip_suffix('c') {
        // publicar → publiqué
        format!("{}qu", base)
    } else if let Some(base) = stem.strip_suffix('g') {
        // pegar → pegué
        format!("{}gu", base)
    } else if let Some(base) = stem.strip_suffix('z') {
        // frizar → fricé
        format!("{}c", base)
    } else {
        stem.to_string()
    }
}

/// construir, huir, incluir: y-insertion, but not seguir/delinquir.
fn is_uir_stem(stem: &str, class: VerbClass) -> bool {
    class == VerbClass::Ir && stem.ends_with('u') && !stem.ends_with("gu") && !stem.ends_with("qu")
}

/// conducir, producir, traducir: strong preterite in -uje. Returns the stem
/// without its final "c".
fn ducir_stem(stem: &str, class: VerbClass) -> Option<&str> {
    if class == VerbClass::Ir && stem.ends_with("duc") {
        stem.strip_suffix('c')
    } else {
        None
    }
}

/// leer, creer, caer: stem ending in a vowel before -er/-ir.
fn is_vowel_stem(stem: &str, class: VerbClass) -> bool {
    class != VerbClass::Ar && stem.ends_with(['a', 'e', 'o'])
}

/// Build the regular paradigm for `stem` + `class`, applying spelling rules
/// and an optional stem change.
pub(crate) fn regular(
    infinitive: &str,
    stem: &str,
    class: VerbClass,
    change: Option<StemChange>,
) -> Paradigm {
    let stressed = change.map_or_else(|| stem.to_string(), |c| stressed_stem(stem, c));
    let present = present_row(stem, &stressed, class);
    let preterite = preterite_row(stem, class, change);
    let future = future_row(&future_stem(infinitive));
    Paradigm {
        preterite,
        present,
        future,
    }
}

fn present_row(stem: &str, stressed: &str, class: VerbClass) -> [String; 6] {
    let first = first_singular_present_stem(stressed, class);
    if is_uir_stem(stem, class) {
        return [
            format!("{}yo", stem),
            format!("{}yes", stem),
            format!("{}ye", stem),
            format!("{}imos", stem),
            format!("{}ís", stem),
            format!("{}yen", stem),
        ];
    }
    let endings: [&str; 6] = match class {
        VerbClass::Ar => ["o", "as", "a", "amos", "áis", "an"],
        VerbClass::Er => ["o", "es", "e", "emos", "éis", "en"],
        VerbClass::Ir => ["o", "es", "e", "imos", "ís", "en"],
    };
    [
        format!("{}{}", first, endings[0]),
        format!("{}{}", stressed, endings[1]),
        format!("{}{}", stressed, endings[2]),
        format!("{}{}", stem, endings[3]),
        format!("{}{}", stem, endings[4]),
        format!("{}{}", stressed, endings[5]),
    ]
}

fn preterite_row(stem: &str, class: VerbClass, change: Option<StemChange>) -> [String; 6] {
    match class {
        VerbClass::Ar => [
            format!("{}é", first_singular_preterite_stem(stem)),
            format!("{}aste", stem),
            format!("{}ó", stem),
            format!("{}amos", stem),
            format!("{}asteis", stem),
            format!("{}aron", stem),
        ],
        VerbClass::Er | VerbClass::Ir => {
            let raised = raised_preterite_stem(stem, class, change);
            if let Some(base) = ducir_stem(stem, class) {
                [
                    format!("{}je", base),
                    format!("{}jiste", base),
                    format!("{}jo", base),
                    format!("{}jimos", base),
                    format!("{}jisteis", base),
                    format!("{}jeron", base),
                ]
            } else if is_uir_stem(stem, class) {
                [
                    format!("{}í", stem),
                    format!("{}iste", stem),
                    format!("{}yó", stem),
                    format!("{}imos", stem),
                    format!("{}isteis", stem),
                    format!("{}yeron", stem),
                ]
            } else if is_vowel_stem(stem, class) {
                [
                    format!("{}í", stem),
                    format!("{}íste", stem),
                    format!("{}yó", stem),
                    format!("{}ímos", stem),
                    format!("{}ísteis", stem),
                    format!("{}yeron", stem),
                ]
            } else {
                [
                    format!("{}í", stem),
                    format!("{}iste", stem),
                    format!("{}ió", raised),
                    format!("{}imos", stem),
                    format!("{}isteis", stem),
                    format!("{}ieron", raised),
                ]
            }
        }
    }
}

/// Regular future stem: the infinitive, with the accent of -ír dropped
/// (reír → reiré).
pub(crate) fn future_stem(infinitive: &str) -> String {
    match infinitive.strip_suffix("ír") {
        Some(base) => format!("{}ir", base),
        None => infinitive.to_string(),
    }
}

/// Future forms attach to the whole infinitive (or an irregular future stem).
pub(crate) fn future_row(future_stem: &str) -> [String; 6] {
    FUTURE_ENDINGS.map(|ending| format!("{}{}", future_stem, ending))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn present(verb: &str, change: Option<StemChange>) -> [String; 6] {
        let (stem, class) = split_infinitive(verb).unwrap();
        regular(verb, stem, class, change).present
    }

    fn preterite(verb: &str, change: Option<StemChange>) -> [String; 6] {
        let (stem, class) = split_infinitive(verb).unwrap();
        regular(verb, stem, class, change).preterite
    }

    #[test]
    fn test_split_infinitive() {
        assert_eq!(split_infinitive("tuitear"), Some(("tuite", VerbClass::Ar)));
        assert_eq!(split_infinitive("comer"), Some(("com", VerbClass::Er)));
        assert_eq!(split_infinitive("subir"), Some(("sub", VerbClass::Ir)));
        assert_eq!(split_infinitive("reír"), Some(("re", VerbClass::Ir)));
        assert_eq!(split_infinitive("ír"), None);
        assert_eq!(split_infinitive("ar"), None);
        assert_eq!(split_infinitive("tweet"), None);
    }

    #[test]
    fn test_regular_ar() {
        assert_eq!(
            present("tuitear", None),
            ["tuiteo", "tuiteas", "tuitea", "tuiteamos", "tuiteáis", "tuitean"]
        );
        assert_eq!(
            preterite("tuitear", None),
            ["tuiteé", "tuiteaste", "tuiteó", "tuiteamos", "tuiteasteis", "tuitearon"]
        );
    }

    #[test]
    fn test_regular_er_ir() {
        assert_eq!(
            present("comer", None),
            ["como", "comes", "come", "comemos", "coméis", "comen"]
        );
        assert_eq!(
            present("subir", None),
            ["subo", "subes", "sube", "subimos", "subís", "suben"]
        );
        assert_eq!(
            preterite("subir", None),
            ["subí", "subiste", "subió", "subimos", "subisteis", "subieron"]
        );
    }

    #[test]
    fn test_preterite_spelling_changes() {
        assert_eq!(preterite("publicar", None)[0], "publiqué");
        assert_eq!(preterite("pegar", None)[0], "pegué");
        assert_eq!(preterite("frizar", None)[0], "fricé");
        assert_eq!(preterite("averiguar", None)[0], "averigüé");
    }

    #[test]
    fn test_present_spelling_changes() {
        assert_eq!(present("escoger", None)[0], "escojo");
        assert_eq!(present("conocer", None)[0], "conozco");
        assert_eq!(present("vencer", None)[0], "venzo");
        assert_eq!(present("seguir", Some(StemChange::EI))[0], "sigo");
        assert_eq!(present("elegir", Some(StemChange::EI))[0], "elijo");
    }

    #[test]
    fn test_stem_changes() {
        assert_eq!(
            present("pensar", Some(StemChange::EIe)),
            ["pienso", "piensas", "piensa", "pensamos", "pensáis", "piensan"]
        );
        assert_eq!(present("jugar", Some(StemChange::UUe))[2], "juega");
        assert_eq!(preterite("jugar", Some(StemChange::UUe))[0], "jugué");
        assert_eq!(preterite("dormir", Some(StemChange::OUe))[2], "durmió");
        assert_eq!(preterite("pedir", Some(StemChange::EI))[5], "pidieron");
        assert_eq!(present("empezar", Some(StemChange::EIe))[0], "empiezo");
    }

    #[test]
    fn test_y_insertion() {
        assert_eq!(
            present("construir", None),
            ["construyo", "construyes", "construye", "construimos", "construís", "construyen"]
        );
        assert_eq!(preterite("construir", None)[2], "construyó");
        assert_eq!(
            preterite("leer", None),
            ["leí", "leíste", "leyó", "leímos", "leísteis", "leyeron"]
        );
    }

    #[test]
    fn test_ducir_preterite() {
        assert_eq!(
            preterite("conducir", None),
            ["conduje", "condujiste", "condujo", "condujimos", "condujisteis", "condujeron"]
        );
        assert_eq!(preterite("producir", None)[2], "produjo");
        assert_eq!(present("traducir", None)[0], "traduzco");
    }

    #[test]
    fn test_future_stem_drops_accent() {
        assert_eq!(future_stem("reír"), "reir");
        assert_eq!(future_stem("tuitear"), "tuitear");
    }

    #[test]
    fn test_future() {
        assert_eq!(
            future_row("tuitear"),
            ["tuitearé", "tuitearás", "tuiteará", "tuitearemos", "tuitearéis", "tuitearán"]
        );
    }
}
