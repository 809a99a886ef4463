//! Tests for the conjugator: form counts, irregulars, ambiguous-form
//! filtering, and unconjugable input.

use super::*;
use crate::error::ConjugationError;

fn surfaces(conjugation: &Conjugation) -> Vec<&str> {
    conjugation
        .forms
        .iter()
        .map(|f| f.surface.as_str())
        .collect()
}

#[test]
fn test_nineteen_forms_for_unlisted_verbs() {
    let conjugator = Conjugator::default();
    for verb in [
        "tuitear", "postear", "likear", "hacer", "dar", "tener", "ir", "subir", "publicar",
        "leer", "construir", "jugar", "seguir", "obtener", "reír", "sonreír", "freír", "oír",
        "conducir", "caer", "oler",
    ] {
        let conjugation = conjugator.conjugate(verb).unwrap();
        assert_eq!(conjugation.forms.len(), FORMS_PER_VERB, "{}", verb);
        assert!(conjugation.removed.is_empty(), "{}", verb);
        assert!(
            conjugation.forms.iter().all(|f| !f.surface.is_empty()),
            "{} produced an empty form",
            verb
        );
    }
}

#[test]
fn test_form_order_and_tags() {
    let conjugation = Conjugator::default().conjugate("tuitear").unwrap();
    let first = &conjugation.forms[0];
    assert_eq!(first.surface, "tuiteé");
    assert_eq!(
        first.category,
        VerbCategory::Finite {
            tense: Tense::Preterite,
            person: Person::First,
            number: Number::Singular,
        }
    );
    let second = &conjugation.forms[1];
    assert_eq!(second.surface, "tuiteamos");

    let last = conjugation.forms.last().unwrap();
    assert_eq!(last.surface, "tuitear");
    assert_eq!(last.category, VerbCategory::Infinitive);
}

#[test]
fn test_regular_ar_surfaces() {
    let conjugation = Conjugator::default().conjugate("tuitear").unwrap();
    let forms = surfaces(&conjugation);
    for expected in [
        "tuiteé", "tuiteaste", "tuiteó", "tuitearon", "tuiteo", "tuiteas", "tuitea",
        "tuiteáis", "tuitean", "tuitearé", "tuitearán", "tuitear",
    ] {
        assert!(forms.contains(&expected), "missing {}", expected);
    }
}

#[test]
fn test_surface_forms_are_deduplicated() {
    let conjugation = Conjugator::default().conjugate("tuitear").unwrap();
    let distinct = conjugation.surface_forms();
    // preterite and present 1pl are both "tuiteamos"
    assert_eq!(distinct.len(), FORMS_PER_VERB - 1);
    assert_eq!(
        distinct.iter().filter(|f| f.as_str() == "tuiteamos").count(),
        1
    );
}

#[test]
fn test_irregular_light_verbs() {
    let conjugator = Conjugator::default();

    let hacer = conjugator.conjugate("hacer").unwrap();
    let forms = surfaces(&hacer);
    for expected in ["hago", "hice", "hizo", "hicimos", "haré", "harán", "hacer"] {
        assert!(forms.contains(&expected), "hacer missing {}", expected);
    }

    let dar = conjugator.conjugate("dar").unwrap();
    let forms = surfaces(&dar);
    for expected in ["doy", "di", "dimos", "dieron", "daré", "dar"] {
        assert!(forms.contains(&expected), "dar missing {}", expected);
    }

    let ir = conjugator.conjugate("ir").unwrap();
    assert!(surfaces(&ir).contains(&"iremos"));
}

#[test]
fn test_prefixed_irregular() {
    let conjugation = Conjugator::default().conjugate("deshacer").unwrap();
    let forms = surfaces(&conjugation);
    assert!(forms.contains(&"deshago"));
    assert!(forms.contains(&"deshizo"));
    assert!(forms.contains(&"desharé"));
}

#[test]
fn test_salir_falls_back_to_regular_preterite() {
    let conjugation = Conjugator::default().conjugate("salir").unwrap();
    let forms = surfaces(&conjugation);
    assert!(forms.contains(&"salgo"));
    assert!(forms.contains(&"salió"));
    assert!(forms.contains(&"saldré"));
}

#[test]
fn test_accented_ir_verbs() {
    let conjugator = Conjugator::default();

    let reir = conjugator.conjugate("reír").unwrap();
    let forms = surfaces(&reir);
    assert_eq!(
        forms[..18],
        [
            "reí", "reímos", "reíste", "reísteis", "rio", "rieron", "río", "reímos", "ríes",
            "reís", "ríe", "ríen", "reiré", "reiremos", "reirás", "reiréis", "reirá", "reirán",
        ]
    );
    assert_eq!(forms[18], "reír");

    let oir = conjugator.conjugate("oír").unwrap();
    let forms = surfaces(&oir);
    for expected in ["oigo", "oyes", "oye", "oímos", "oyen", "oyó", "oyeron", "oiré", "oír"] {
        assert!(forms.contains(&expected), "oír missing {}", expected);
    }

    let sonreir = conjugator.conjugate("sonreír").unwrap();
    let forms = surfaces(&sonreir);
    assert!(forms.contains(&"sonrío"));
    assert!(forms.contains(&"sonrieron"));
    assert!(forms.contains(&"sonreiré"));

    let freir = conjugator.conjugate("freír").unwrap();
    let forms = surfaces(&freir);
    assert!(forms.contains(&"frío"));
    assert!(forms.contains(&"frio"));
}

#[test]
fn test_common_irregular_stems() {
    let conjugator = Conjugator::default();

    let conducir = conjugator.conjugate("conducir").unwrap();
    let forms = surfaces(&conducir);
    for expected in ["conduzco", "conduje", "condujo", "condujeron", "conduciré"] {
        assert!(forms.contains(&expected), "conducir missing {}", expected);
    }
    assert!(!forms.contains(&"condució"));

    let producir = conjugator.conjugate("producir").unwrap();
    assert!(surfaces(&producir).contains(&"produjo"));

    let caer = conjugator.conjugate("caer").unwrap();
    let forms = surfaces(&caer);
    for expected in ["caigo", "cae", "cayó", "cayeron", "caeré"] {
        assert!(forms.contains(&expected), "caer missing {}", expected);
    }
    assert!(!forms.contains(&"cao"));

    let oler = conjugator.conjugate("oler").unwrap();
    let forms = surfaces(&oler);
    assert!(forms.contains(&"huelo"));
    assert!(forms.contains(&"olemos"));
    assert!(!forms.contains(&"olo"));
}

#[test]
fn test_input_is_normalized() {
    let conjugation = Conjugator::default().conjugate("  Tuitear ").unwrap();
    assert_eq!(conjugation.infinitive, "tuitear");
}

#[test]
fn test_ambiguous_forms_removed() {
    let conjugator = Conjugator::default();
    for (verb, noun_like) in [
        ("accesar", ["acceso", "accesa"]),
        ("auditar", ["audito", "audita"]),
        ("boxear", ["boxeo", "boxea"]),
        ("chequear", ["chequeo", "chequea"]),
        ("formear", ["formeo", "formea"]),
        ("frizar", ["frizo", "friza"]),
    ] {
        let conjugation = conjugator.conjugate(verb).unwrap();
        let forms = surfaces(&conjugation);
        for form in noun_like {
            assert!(!forms.contains(&form), "{} still has {}", verb, form);
        }
        let mut removed = conjugation.removed_surface_forms();
        removed.sort_unstable();
        let mut expected = noun_like.to_vec();
        expected.sort_unstable();
        assert_eq!(removed, expected, "{}", verb);
        assert_eq!(conjugation.forms.len(), FORMS_PER_VERB - 2, "{}", verb);
    }
}

#[test]
fn test_empty_table_keeps_everything() {
    let conjugator = Conjugator::new(AmbiguousVerbTable::empty());
    let conjugation = conjugator.conjugate("chequear").unwrap();
    assert_eq!(conjugation.forms.len(), FORMS_PER_VERB);
    assert!(surfaces(&conjugation).contains(&"chequeo"));
}

#[test]
fn test_all_forms_filtered_is_not_an_error() {
    // A table listing every form leaves an empty conjugation, distinct from
    // an unconjugable verb.
    let conjugator = Conjugator::default();
    let all: Vec<String> = conjugator.conjugate("dar").unwrap().surface_forms();
    let tsv = format!("verb\tforms\ndar\t{}\n", all.join("|"));
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), tsv).unwrap();
    let table = AmbiguousVerbTable::from_tsv(file.path()).unwrap();

    let conjugation = Conjugator::new(table).conjugate("dar").unwrap();
    assert!(conjugation.is_empty());
    assert_eq!(conjugation.removed.len(), FORMS_PER_VERB);
}

#[test]
fn test_unconjugable_verbs() {
    let conjugator = Conjugator::default();
    for verb in ["", "tweet", "ar", "hacer2", "tuit-ear", "xyzr"] {
        let result = conjugator.conjugate(verb);
        assert!(
            matches!(result, Err(ConjugationError::Unconjugable { .. })),
            "{:?} should be unconjugable, got {:?}",
            verb,
            result
        );
    }
}

#[test]
fn test_unconjugable_error_names_verb() {
    let err = Conjugator::default().conjugate("tweet").unwrap_err();
    assert!(err.to_string().contains("tweet"));
}
