//! Irregular verbs and stem-changing verbs.
//!
//! Irregular entries override whole tense rows; a `None` row falls back to the
//! regular paradigm. Only verbs common as light verbs or in loanword
//! periphrasis are listed.

use super::paradigm::StemChange;

pub(crate) struct IrregularVerb {
    pub infinitive: &'static str,
    pub preterite: Option<[&'static str; 6]>,
    pub present: Option<[&'static str; 6]>,
    pub future_stem: Option<&'static str>,
    /// Prefixed derivatives (deshacer, obtener, proponer) share the paradigm.
    pub derivable: bool,
}

const PREFIXES: &[&str] = &[
    "des", "re", "pro", "com", "con", "dis", "su", "sos", "ex", "im", "pre", "man", "ob", "de",
    "contra", "inter", "sus", "a", "abs", "son",
];

pub(crate) static IRREGULAR_VERBS: &[IrregularVerb] = &[
    IrregularVerb {
        infinitive: "hacer",
        preterite: Some(["hice", "hiciste", "hizo", "hicimos", "hicisteis", "hicieron"]),
        present: Some(["hago", "haces", "hace", "hacemos", "hacéis", "hacen"]),
        future_stem: Some("har"),
        derivable: true,
    },
    IrregularVerb {
        infinitive: "dar",
        preterite: Some(["di", "diste", "dio", "dimos", "disteis", "dieron"]),
        present: Some(["doy", "das", "da", "damos", "dais", "dan"]),
        future_stem: None,
        derivable: false,
    },
    IrregularVerb {
        infinitive: "tener",
        preterite: Some(["tuve", "tuviste", "tuvo", "tuvimos", "tuvisteis", "tuvieron"]),
        present: Some(["tengo", "tienes", "tiene", "tenemos", "tenéis", "tienen"]),
        future_stem: Some("tendr"),
        derivable: true,
    },
    IrregularVerb {
        infinitive: "poner",
        preterite: Some(["puse", "pusiste", "puso", "pusimos", "pusisteis", "pusieron"]),
        present: Some(["pongo", "pones", "pone", "ponemos", "ponéis", "ponen"]),
        future_stem: Some("pondr"),
        derivable: true,
    },
    IrregularVerb {
        infinitive: "ir",
        preterite: Some(["fui", "fuiste", "fue", "fuimos", "fuisteis", "fueron"]),
        present: Some(["voy", "vas", "va", "vamos", "vais", "van"]),
        future_stem: None,
        derivable: false,
    },
    IrregularVerb {
        infinitive: "ser",
        preterite: Some(["fui", "fuiste", "fue", "fuimos", "fuisteis", "fueron"]),
        present: Some(["soy", "eres", "es", "somos", "sois", "son"]),
        future_stem: None,
        derivable: false,
    },
    IrregularVerb {
        infinitive: "estar",
        preterite: Some([
            "estuve",
            "estuviste",
            "estuvo",
            "estuvimos",
            "estuvisteis",
            "estuvieron",
        ]),
        present: Some(["estoy", "estás", "está", "estamos", "estáis", "están"]),
        future_stem: None,
        derivable: false,
    },
    IrregularVerb {
        infinitive: "decir",
        preterite: Some(["dije", "dijiste", "dijo", "dijimos", "dijisteis", "dijeron"]),
        present: Some(["digo", "dices", "dice", "decimos", "decís", "dicen"]),
        future_stem: Some("dir"),
        derivable: true,
    },
    IrregularVerb {
        infinitive: "ver",
        preterite: Some(["vi", "viste", "vio", "vimos", "visteis", "vieron"]),
        present: Some(["veo", "ves", "ve", "vemos", "veis", "ven"]),
        future_stem: None,
        derivable: false,
    },
    IrregularVerb {
        infinitive: "venir",
        preterite: Some(["vine", "viniste", "vino", "vinimos", "vinisteis", "vinieron"]),
        present: Some(["vengo", "vienes", "viene", "venimos", "venís", "vienen"]),
        future_stem: Some("vendr"),
        derivable: true,
    },
    IrregularVerb {
        infinitive: "querer",
        preterite: Some(["quise", "quisiste", "quiso", "quisimos", "quisisteis", "quisieron"]),
        present: Some(["quiero", "quieres", "quiere", "queremos", "queréis", "quieren"]),
        future_stem: Some("querr"),
        derivable: false,
    },
    IrregularVerb {
        infinitive: "poder",
        preterite: Some(["pude", "pudiste", "pudo", "pudimos", "pudisteis", "pudieron"]),
        present: Some(["puedo", "puedes", "puede", "podemos", "podéis", "pueden"]),
        future_stem: Some("podr"),
        derivable: false,
    },
    IrregularVerb {
        infinitive: "saber",
        preterite: Some(["supe", "supiste", "supo", "supimos", "supisteis", "supieron"]),
        present: Some(["sé", "sabes", "sabe", "sabemos", "sabéis", "saben"]),
        future_stem: Some("sabr"),
        derivable: false,
    },
    IrregularVerb {
        infinitive: "traer",
        preterite: Some(["traje", "trajiste", "trajo", "trajimos", "trajisteis", "trajeron"]),
        present: Some(["traigo", "traes", "trae", "traemos", "traéis", "traen"]),
        future_stem: None,
        derivable: true,
    },
    IrregularVerb {
        infinitive: "salir",
        preterite: None,
        present: Some(["salgo", "sales", "sale", "salimos", "salís", "salen"]),
        future_stem: Some("saldr"),
        derivable: false,
    },
    IrregularVerb {
        infinitive: "caer",
        preterite: None,
        present: Some(["caigo", "caes", "cae", "caemos", "caéis", "caen"]),
        future_stem: None,
        derivable: true,
    },
    IrregularVerb {
        infinitive: "oler",
        preterite: None,
        present: Some(["huelo", "hueles", "huele", "olemos", "oléis", "huelen"]),
        future_stem: None,
        derivable: false,
    },
    IrregularVerb {
        infinitive: "oír",
        preterite: Some(["oí", "oíste", "oyó", "oímos", "oísteis", "oyeron"]),
        present: Some(["oigo", "oyes", "oye", "oímos", "oís", "oyen"]),
        future_stem: Some("oir"),
        derivable: true,
    },
    IrregularVerb {
        infinitive: "reír",
        preterite: Some(["reí", "reíste", "rio", "reímos", "reísteis", "rieron"]),
        present: Some(["río", "ríes", "ríe", "reímos", "reís", "ríen"]),
        future_stem: Some("reir"),
        derivable: true,
    },
    IrregularVerb {
        infinitive: "freír",
        preterite: Some(["freí", "freíste", "frio", "freímos", "freísteis", "frieron"]),
        present: Some(["frío", "fríes", "fríe", "freímos", "freís", "fríen"]),
        future_stem: Some("freir"),
        derivable: false,
    },
    IrregularVerb {
        infinitive: "haber",
        preterite: Some(["hube", "hubiste", "hubo", "hubimos", "hubisteis", "hubieron"]),
        present: Some(["he", "has", "ha", "hemos", "habéis", "han"]),
        future_stem: Some("habr"),
        derivable: false,
    },
];

static STEM_CHANGES: &[(&str, StemChange)] = &[
    ("pensar", StemChange::EIe),
    ("empezar", StemChange::EIe),
    ("comenzar", StemChange::EIe),
    ("cerrar", StemChange::EIe),
    ("despertar", StemChange::EIe),
    ("recomendar", StemChange::EIe),
    ("calentar", StemChange::EIe),
    ("sentar", StemChange::EIe),
    ("negar", StemChange::EIe),
    ("regar", StemChange::EIe),
    ("entender", StemChange::EIe),
    ("perder", StemChange::EIe),
    ("encender", StemChange::EIe),
    ("defender", StemChange::EIe),
    ("sentir", StemChange::EIe),
    ("preferir", StemChange::EIe),
    ("mentir", StemChange::EIe),
    ("convertir", StemChange::EIe),
    ("divertir", StemChange::EIe),
    ("advertir", StemChange::EIe),
    ("sugerir", StemChange::EIe),
    ("contar", StemChange::OUe),
    ("mostrar", StemChange::OUe),
    ("demostrar", StemChange::OUe),
    ("encontrar", StemChange::OUe),
    ("recordar", StemChange::OUe),
    ("probar", StemChange::OUe),
    ("aprobar", StemChange::OUe),
    ("comprobar", StemChange::OUe),
    ("soñar", StemChange::OUe),
    ("volar", StemChange::OUe),
    ("costar", StemChange::OUe),
    ("colgar", StemChange::OUe),
    ("rogar", StemChange::OUe),
    ("sonar", StemChange::OUe),
    ("acostar", StemChange::OUe),
    ("volver", StemChange::OUe),
    ("devolver", StemChange::OUe),
    ("resolver", StemChange::OUe),
    ("envolver", StemChange::OUe),
    ("mover", StemChange::OUe),
    ("llover", StemChange::OUe),
    ("doler", StemChange::OUe),
    ("dormir", StemChange::OUe),
    ("morir", StemChange::OUe),
    ("jugar", StemChange::UUe),
    ("pedir", StemChange::EI),
    ("despedir", StemChange::EI),
    ("impedir", StemChange::EI),
    ("servir", StemChange::EI),
    ("repetir", StemChange::EI),
    ("competir", StemChange::EI),
    ("medir", StemChange::EI),
    ("vestir", StemChange::EI),
    ("seguir", StemChange::EI),
    ("conseguir", StemChange::EI),
    ("perseguir", StemChange::EI),
    ("elegir", StemChange::EI),
    ("corregir", StemChange::EI),
];

/// Find the irregular entry for `verb`, with the prefix to prepend to every form.
pub(crate) fn lookup_irregular(verb: &str) -> Option<(&'static str, &'static IrregularVerb)> {
    if let Some(entry) = IRREGULAR_VERBS.iter().find(|v| v.infinitive == verb) {
        return Some(("", entry));
    }
    IRREGULAR_VERBS
        .iter()
        .filter(|v| v.derivable)
        .find_map(|v| {
            let prefix = verb.strip_suffix(v.infinitive)?;
            PREFIXES
                .iter()
                .find(|p| **p == prefix)
                .map(|p| (*p, v))
        })
}

pub(crate) fn lookup_stem_change(verb: &str) -> Option<StemChange> {
    STEM_CHANGES
        .iter()
        .find(|(infinitive, _)| *infinitive == verb)
        .map(|(_, change)| *change)
}
