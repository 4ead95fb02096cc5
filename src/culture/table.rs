use super::{Culture, DateTimeFormat, NumberFormat};

const NBSP: &str = "\u{a0}";
const NNBSP: &str = "\u{202f}";

pub(super) static INVARIANT: Culture = Culture {
    name: "",
    lcid: 0x007f,
    display_name: "Invariant Language (Invariant Country)",
    number_format: NumberFormat::INVARIANT,
    date_time_format: DateTimeFormat::INVARIANT,
};

static EN_US: Culture = Culture {
    name: "en-US",
    lcid: 0x0409,
    display_name: "English (United States)",
    number_format: NumberFormat::new(".", ",", "$", 2),
    date_time_format: DateTimeFormat {
        short_date_pattern: "M/d/yyyy",
        long_date_pattern: "dddd, MMMM d, yyyy",
        short_time_pattern: "h:mm tt",
        long_time_pattern: "h:mm:ss tt",
        month_day_pattern: "MMMM d",
        year_month_pattern: "MMMM yyyy",
        ..DateTimeFormat::INVARIANT
    },
};

static EN_GB: Culture = Culture {
    name: "en-GB",
    lcid: 0x0809,
    display_name: "English (United Kingdom)",
    number_format: NumberFormat::new(".", ",", "\u{a3}", 2),
    date_time_format: DateTimeFormat {
        am_designator: "am",
        pm_designator: "pm",
        short_date_pattern: "dd/MM/yyyy",
        long_date_pattern: "dd MMMM yyyy",
        month_day_pattern: "d MMMM",
        year_month_pattern: "MMMM yyyy",
        ..DateTimeFormat::INVARIANT
    },
};

static FR_FR: Culture = Culture {
    name: "fr-FR",
    lcid: 0x040c,
    display_name: "French (France)",
    number_format: NumberFormat::new(",", NNBSP, "\u{20ac}", 2),
    date_time_format: DateTimeFormat {
        month_names: [
            "janvier",
            "f\u{e9}vrier",
            "mars",
            "avril",
            "mai",
            "juin",
            "juillet",
            "ao\u{fb}t",
            "septembre",
            "octobre",
            "novembre",
            "d\u{e9}cembre",
        ],
        abbreviated_month_names: [
            "janv.",
            "f\u{e9}vr.",
            "mars",
            "avr.",
            "mai",
            "juin",
            "juil.",
            "ao\u{fb}t",
            "sept.",
            "oct.",
            "nov.",
            "d\u{e9}c.",
        ],
        day_names: [
            "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
        ],
        abbreviated_day_names: ["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."],
        short_date_pattern: "dd/MM/yyyy",
        long_date_pattern: "dddd d MMMM yyyy",
        month_day_pattern: "d MMMM",
        year_month_pattern: "MMMM yyyy",
        ..DateTimeFormat::INVARIANT
    },
};

static DE_DE: Culture = Culture {
    name: "de-DE",
    lcid: 0x0407,
    display_name: "German (Germany)",
    number_format: NumberFormat::new(",", ".", "\u{20ac}", 2),
    date_time_format: DateTimeFormat {
        date_separator: ".",
        month_names: [
            "Januar",
            "Februar",
            "M\u{e4}rz",
            "April",
            "Mai",
            "Juni",
            "Juli",
            "August",
            "September",
            "Oktober",
            "November",
            "Dezember",
        ],
        abbreviated_month_names: [
            "Jan.", "Feb.", "M\u{e4}rz", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.",
            "Nov.", "Dez.",
        ],
        day_names: [
            "Sonntag",
            "Montag",
            "Dienstag",
            "Mittwoch",
            "Donnerstag",
            "Freitag",
            "Samstag",
        ],
        abbreviated_day_names: ["So.", "Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa."],
        short_date_pattern: "dd.MM.yyyy",
        long_date_pattern: "dddd, d. MMMM yyyy",
        month_day_pattern: "d. MMMM",
        year_month_pattern: "MMMM yyyy",
        ..DateTimeFormat::INVARIANT
    },
};

static ES_ES: Culture = Culture {
    name: "es-ES",
    lcid: 0x0c0a,
    display_name: "Spanish (Spain)",
    number_format: NumberFormat::new(",", ".", "\u{20ac}", 2),
    date_time_format: DateTimeFormat {
        am_designator: "a.\u{a0}m.",
        pm_designator: "p.\u{a0}m.",
        month_names: [
            "enero",
            "febrero",
            "marzo",
            "abril",
            "mayo",
            "junio",
            "julio",
            "agosto",
            "septiembre",
            "octubre",
            "noviembre",
            "diciembre",
        ],
        abbreviated_month_names: [
            "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
        ],
        day_names: [
            "domingo",
            "lunes",
            "martes",
            "mi\u{e9}rcoles",
            "jueves",
            "viernes",
            "s\u{e1}bado",
        ],
        abbreviated_day_names: ["dom", "lun", "mar", "mi\u{e9}", "jue", "vie", "s\u{e1}b"],
        short_date_pattern: "dd/MM/yyyy",
        long_date_pattern: "dddd, d 'de' MMMM 'de' yyyy",
        short_time_pattern: "H:mm",
        long_time_pattern: "H:mm:ss",
        month_day_pattern: "d 'de' MMMM",
        year_month_pattern: "MMMM 'de' yyyy",
        ..DateTimeFormat::INVARIANT
    },
};

static SV_SE: Culture = Culture {
    name: "sv-SE",
    lcid: 0x041d,
    display_name: "Swedish (Sweden)",
    number_format: NumberFormat {
        negative_sign: "\u{2212}",
        ..NumberFormat::new(",", NBSP, "kr", 2)
    },
    date_time_format: DateTimeFormat {
        date_separator: "-",
        am_designator: "fm",
        pm_designator: "em",
        month_names: [
            "januari",
            "februari",
            "mars",
            "april",
            "maj",
            "juni",
            "juli",
            "augusti",
            "september",
            "oktober",
            "november",
            "december",
        ],
        abbreviated_month_names: [
            "jan.", "feb.", "mars", "apr.", "maj", "juni", "juli", "aug.", "sep.", "okt.", "nov.",
            "dec.",
        ],
        day_names: [
            "s\u{f6}ndag",
            "m\u{e5}ndag",
            "tisdag",
            "onsdag",
            "torsdag",
            "fredag",
            "l\u{f6}rdag",
        ],
        abbreviated_day_names: [
            "s\u{f6}n", "m\u{e5}n", "tis", "ons", "tors", "fre", "l\u{f6}r",
        ],
        short_date_pattern: "yyyy-MM-dd",
        long_date_pattern: "dddd d MMMM yyyy",
        month_day_pattern: "d MMMM",
        year_month_pattern: "MMMM yyyy",
        ..DateTimeFormat::INVARIANT
    },
};

static NB_NO: Culture = Culture {
    name: "nb-NO",
    lcid: 0x0414,
    display_name: "Norwegian Bokm\u{e5}l (Norway)",
    number_format: NumberFormat {
        negative_sign: "\u{2212}",
        ..NumberFormat::new(",", NBSP, "kr", 2)
    },
    date_time_format: DateTimeFormat {
        date_separator: ".",
        am_designator: "a.m.",
        pm_designator: "p.m.",
        month_names: [
            "januar",
            "februar",
            "mars",
            "april",
            "mai",
            "juni",
            "juli",
            "august",
            "september",
            "oktober",
            "november",
            "desember",
        ],
        abbreviated_month_names: [
            "jan.", "feb.", "mar.", "apr.", "mai", "jun.", "jul.", "aug.", "sep.", "okt.", "nov.",
            "des.",
        ],
        day_names: [
            "s\u{f8}ndag",
            "mandag",
            "tirsdag",
            "onsdag",
            "torsdag",
            "fredag",
            "l\u{f8}rdag",
        ],
        abbreviated_day_names: [
            "s\u{f8}n.", "man.", "tir.", "ons.", "tor.", "fre.", "l\u{f8}r.",
        ],
        short_date_pattern: "dd.MM.yyyy",
        long_date_pattern: "dddd d. MMMM yyyy",
        month_day_pattern: "d. MMMM",
        year_month_pattern: "MMMM yyyy",
        ..DateTimeFormat::INVARIANT
    },
};

static DA_DK: Culture = Culture {
    name: "da-DK",
    lcid: 0x0406,
    display_name: "Danish (Denmark)",
    number_format: NumberFormat::new(",", ".", "kr.", 2),
    date_time_format: DateTimeFormat {
        date_separator: "-",
        time_separator: ".",
        month_names: [
            "januar",
            "februar",
            "marts",
            "april",
            "maj",
            "juni",
            "juli",
            "august",
            "september",
            "oktober",
            "november",
            "december",
        ],
        abbreviated_month_names: [
            "jan.", "feb.", "mar.", "apr.", "maj", "jun.", "jul.", "aug.", "sep.", "okt.", "nov.",
            "dec.",
        ],
        day_names: [
            "s\u{f8}ndag",
            "mandag",
            "tirsdag",
            "onsdag",
            "torsdag",
            "fredag",
            "l\u{f8}rdag",
        ],
        abbreviated_day_names: [
            "s\u{f8}n.", "man.", "tirs.", "ons.", "tors.", "fre.", "l\u{f8}r.",
        ],
        short_date_pattern: "dd/MM/yyyy",
        long_date_pattern: "dddd 'den' d. MMMM yyyy",
        month_day_pattern: "d. MMMM",
        year_month_pattern: "MMMM yyyy",
        ..DateTimeFormat::INVARIANT
    },
};

pub(super) static CULTURES: [&Culture; 9] = [
    &INVARIANT, &EN_US, &EN_GB, &FR_FR, &DE_DE, &ES_ES, &SV_SE, &NB_NO, &DA_DK,
];
