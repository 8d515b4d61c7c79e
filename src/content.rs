//! Site copy (German).

use crate::core::vcard::Contact;

pub const HERO_TITLE: &str = "Kurzfristige Verstärkung mit langfristigem Effekt.";
pub const HERO_SUBTITLE: &str =
    "Interim Management in der Schnittstelle von Qualität, Prozessen und Lieferanten.";

pub struct InfoCard {
    pub title: &'static str,
    pub points: &'static [&'static str],
}

pub struct TrainingCard {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
}

pub const QUALITY_INTRO: &str =
    "Stabile Qualität ist kein Zufall, sondern das Ergebnis klarer Strukturen und gelebter Verantwortung.";
pub const QUALITY_CARDS: &[InfoCard] = &[
    InfoCard {
        title: "Systeme",
        points: &[
            "Aufbau und Pflege von QM-Systemen nach ISO 9001 und IATF 16949",
            "Vorbereitung und Begleitung von Zertifizierungsaudits",
        ],
    },
    InfoCard {
        title: "Reklamationen",
        points: &[
            "8D-Bearbeitung mit belastbarer Ursachenanalyse",
            "Nachhaltige Abstellmaßnahmen statt Symptombekämpfung",
        ],
    },
];

pub const PROCESS_INTRO: &str =
    "Prozesse, die verstanden werden, werden gelebt. Ich mache Abläufe sichtbar, messbar und verbesserbar.";
pub const PROCESS_CARDS: &[InfoCard] = &[
    InfoCard {
        title: "Analyse",
        points: &[
            "Prozesslandkarten und Schnittstellenklärung",
            "Kennzahlen, die Entscheidungen tragen",
        ],
    },
    InfoCard {
        title: "Verbesserung",
        points: &[
            "FMEA, Control Plans und Prozessfreigaben",
            "Kontinuierliche Verbesserung mit dem Team vor Ort",
        ],
    },
];

pub const SUPPLIER_INTRO: &str =
    "Starke Lieferanten sind ein Wettbewerbsvorteil. Ich entwickle Lieferketten, auf die Sie sich verlassen können.";
pub const SUPPLIER_CARDS: &[InfoCard] = &[
    InfoCard {
        title: "Aufbau",
        points: &[
            "Lieferantenauswahl, Audits und Freigaben (PPAP, PPF)",
            "Anlaufbegleitung neuer Teile und Standorte",
        ],
    },
    InfoCard {
        title: "Entwicklung",
        points: &[
            "Eskalationsmanagement bei kritischen Lieferanten",
            "Gemeinsame Maßnahmenpläne mit messbaren Zielen",
        ],
    },
];

pub const TRAININGS_INTRO: &str = "Wissen, das im Alltag ankommt: praxisnahe Schulungen für Ihr Team.";
pub const TRAININGS: &[TrainingCard] = &[
    TrainingCard {
        title: "Qualitätsmanagement kompakt",
        category: "Grundlagen",
        description: "Normanforderungen verständlich erklärt und auf Ihre Organisation übertragen.",
    },
    TrainingCard {
        title: "8D und Problemlösung",
        category: "Qualitätsmanagement",
        description: "Strukturierte Ursachenanalyse mit Übungen aus der eigenen Produktion.",
    },
    TrainingCard {
        title: "Lieferantenaudits",
        category: "Lieferanten",
        description: "Audits vorbereiten, durchführen und wirksam nachverfolgen.",
    },
];

pub const ABOUT_TITLE: &str = "Über mich";
pub const ABOUT_BODY: &str =
    "Als Interim Manager übernehme ich Verantwortung dort, wo sie kurzfristig gebraucht wird: \
     in Qualität, Prozessen und Lieferkette. Ich arbeite nah am Team, schaffe Klarheit und \
     hinterlasse Strukturen, die auch nach meinem Einsatz tragen.";

pub const CTA_TITLE: &str = "Lassen Sie uns sprechen.";
pub const CTA_BODY: &str = "Ein kurzes Gespräch genügt, um zu klären, wie ich Sie unterstützen kann.";

pub const YOUTUBE_URL: &str = "https://www.youtube.com/";

pub fn owner() -> Contact {
    Contact {
        given_name: "Merab".to_owned(),
        family_name: "Tedoradze".to_owned(),
        org: "Interim Management Tedoradze".to_owned(),
        email: "Tedoradze.merab@web.de".to_owned(),
        phone: "+49 177 7376989".to_owned(),
    }
}

pub const IMPRESSUM_HTML: &str = r#"<p class="mb-4">Angaben gemäß § 5 TMG</p>
<p class="mb-2">Merab Tedoradze<br />Musterstraße 1<br />12345 Musterstadt<br />Deutschland</p>
<p class="mb-2">Telefon: +49 177 7376989<br />E-Mail: Tedoradze.merab@web.de</p>
<p class="mb-2">Umsatzsteuer-ID: DE123456789</p>"#;

pub const DATENSCHUTZ_HTML: &str = r#"<p class="mb-4">Wir nehmen den Schutz Ihrer persönlichen Daten sehr ernst. Nachfolgend informieren wir Sie über die Erhebung, Verarbeitung und Nutzung Ihrer Daten im Rahmen dieser Website.</p>
<h2>1. Verantwortlicher</h2>
<p class="mb-2">Merab Tedoradze<br />Musterstraße 1<br />12345 Musterstadt<br />Deutschland</p>
<h2>2. Erhebung und Verarbeitung von Daten</h2>
<p class="mb-2">Beim Besuch dieser Website werden automatisch Informationen (z.B. IP-Adresse, Datum, Uhrzeit) erfasst. Diese Daten dienen ausschließlich statistischen Zwecken und werden nicht an Dritte weitergegeben.</p>
<h2>3. Ihre Rechte</h2>
<p class="mb-2">Sie haben das Recht auf Auskunft, Berichtigung, Löschung und Einschränkung der Verarbeitung Ihrer Daten. Kontaktieren Sie uns hierzu unter Tedoradze.merab@web.de.</p>"#;

pub const TERMS_HTML: &str = r#"<p class="mb-4">Mit der Nutzung dieser Website erkennen Sie die folgenden Allgemeinen Geschäftsbedingungen (AGB) und Nutzungsbedingungen an.</p>
<h2>1. Geltungsbereich</h2>
<p class="mb-2">Diese Bedingungen gelten für alle Nutzer dieser Website.</p>
<h2>2. Nutzung der Website</h2>
<p class="mb-2">Die Inhalte dieser Website dürfen nicht ohne ausdrückliche Genehmigung weiterverwendet werden.</p>
<h2>3. Haftung</h2>
<p class="mb-2">Wir übernehmen keine Haftung für die Richtigkeit und Vollständigkeit der bereitgestellten Informationen.</p>"#;
