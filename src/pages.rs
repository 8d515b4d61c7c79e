//! HTML for each route. Pure string building so the markup can be checked
//! against the track tables on the host.

use crate::constants::{LOGO_SRC, NAV_ID, PAGE_ROOT_ID};
use crate::content::{self, InfoCard, TrainingCard};
use crate::core::route::{Route, VCARD_PARAM};
use crate::core::sections::{Section, LOGO_ID};
use std::fmt::Write as _;

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Full page body for `route`: navigation, main content and footer.
pub fn render(route: Route) -> String {
    let main = match route {
        Route::Home => home(),
        Route::Impressum => legal(route, content::IMPRESSUM_HTML),
        Route::Datenschutz => legal(route, content::DATENSCHUTZ_HTML),
        Route::Terms => legal(route, content::TERMS_HTML),
        Route::Kontakt => kontakt(),
        Route::NotFound => not_found(),
    };
    format!(
        "{}<main id=\"{}\">{}</main>{}",
        nav_bar(route),
        PAGE_ROOT_ID,
        main,
        footer()
    )
}

pub fn nav_bar(route: Route) -> String {
    let mut html = format!(
        "<nav id=\"{NAV_ID}\" class=\"navbar\" aria-label=\"Hauptnavigation\">\
         <a href=\"/\" data-route=\"/\" data-scroll-top=\"1\" class=\"nav-logo\" aria-label=\"Zur Startseite scrollen\">\
         <img src=\"{LOGO_SRC}\" alt=\"Logo\" width=\"40\" height=\"40\" /></a>"
    );
    for section in Section::NAV {
        let _ = write!(
            html,
            "<a id=\"nav-{id}\" href=\"/#{id}\" data-section=\"{id}\" class=\"nav-link\">{label}</a>",
            id = section.id(),
            label = escape_html(section.nav_label()),
        );
    }
    html.push_str("<span class=\"nav-spacer\"></span>");
    let current = if route == Route::Kontakt {
        " nav-active\" aria-current=\"page"
    } else {
        ""
    };
    let _ = write!(
        html,
        "<a href=\"{path}\" data-route=\"{path}\" class=\"nav-link{current}\">Kontakt</a></nav>",
        path = Route::Kontakt.path(),
    );
    html
}

pub fn footer() -> String {
    let mut html = String::from("<footer class=\"footer\"><nav>");
    for (route, label) in [
        (Route::Impressum, "Impressum"),
        (Route::Datenschutz, "Datenschutz"),
        (Route::Terms, "AGB"),
        (Route::Kontakt, "Kontakt"),
    ] {
        let _ = write!(
            html,
            "<a href=\"{p}\" data-route=\"{p}\">{label}</a>",
            p = route.path()
        );
    }
    let _ = write!(
        html,
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" aria-label=\"YouTube\">YouTube</a></nav></footer>",
        content::YOUTUBE_URL
    );
    html
}

/// Fixed full-screen overlay faded out after load.
pub fn intro_overlay() -> String {
    format!(
        "<div id=\"{}\" role=\"dialog\" aria-modal=\"true\" aria-label=\"Logo animation\" class=\"intro-overlay\">\
         <div id=\"{}\" class=\"intro-blur\"></div></div>",
        crate::constants::INTRO_OVERLAY_ID,
        crate::constants::INTRO_BLUR_ID
    )
}

fn section_open(section: Section, extra_class: &str) -> String {
    format!(
        "<section id=\"{}\" class=\"section {extra_class}\"><div id=\"{}\" class=\"section-content\">",
        section.id(),
        section.content_id()
    )
}

fn info_cards(cards: &[InfoCard]) -> String {
    let mut html = String::from("<div class=\"cards\">");
    for card in cards {
        let _ = write!(
            html,
            "<div class=\"info-card\"><h3>{}</h3><ul>",
            escape_html(card.title)
        );
        for point in card.points {
            let _ = write!(html, "<li>{}</li>", escape_html(point));
        }
        html.push_str("</ul></div>");
    }
    html.push_str("</div>");
    html
}

fn training_cards(cards: &[TrainingCard]) -> String {
    let mut html = String::from("<div id=\"schulungen-cards\" class=\"cards training-cards\">");
    for card in cards {
        let _ = write!(
            html,
            "<div class=\"training-card\"><span class=\"chip\">{}</span><h3>{}</h3><p>{}</p></div>",
            escape_html(card.category),
            escape_html(card.title),
            escape_html(card.description)
        );
    }
    html.push_str("</div>");
    html
}

fn topic_section(section: Section, intro: &str, cards: &[InfoCard]) -> String {
    format!(
        "{}<h2 id=\"{}\" class=\"section-title\">{}</h2><div id=\"{}\" class=\"section-body\"><p>{}</p>{}</div></div></section>",
        section_open(section, ""),
        section.title_id(),
        escape_html(section.nav_label()),
        section.body_id(),
        escape_html(intro),
        info_cards(cards)
    )
}

pub fn home() -> String {
    let mut html = format!(
        "<img id=\"{LOGO_ID}\" class=\"site-logo\" src=\"{LOGO_SRC}\" alt=\"\" aria-hidden=\"true\" />"
    );
    let hero = Section::Hero;
    let _ = write!(
        html,
        "{}<h1 id=\"{}\" class=\"hero-title\">{}</h1><p id=\"{}\" class=\"hero-subtitle\">{}</p></div></section>",
        section_open(hero, "hero"),
        hero.title_id(),
        escape_html(content::HERO_TITLE),
        hero.body_id(),
        escape_html(content::HERO_SUBTITLE)
    );
    html.push_str(&topic_section(
        Section::Quality,
        content::QUALITY_INTRO,
        content::QUALITY_CARDS,
    ));
    html.push_str(&topic_section(
        Section::Process,
        content::PROCESS_INTRO,
        content::PROCESS_CARDS,
    ));
    html.push_str(&topic_section(
        Section::Suppliers,
        content::SUPPLIER_INTRO,
        content::SUPPLIER_CARDS,
    ));

    let trainings = Section::Trainings;
    let _ = write!(
        html,
        "{}<h2 id=\"{}\" class=\"section-title\">{}</h2><div id=\"{}\" class=\"section-body\"><p>{}</p></div>{}</div></section>",
        section_open(trainings, ""),
        trainings.title_id(),
        escape_html(trainings.nav_label()),
        trainings.body_id(),
        escape_html(content::TRAININGS_INTRO),
        training_cards(content::TRAININGS)
    );

    let about = Section::About;
    let _ = write!(
        html,
        "{}<h2 id=\"{}\" class=\"section-title\">{}</h2><div id=\"{}\" class=\"section-body\"><p>{}</p></div></div></section>",
        section_open(about, ""),
        about.title_id(),
        escape_html(content::ABOUT_TITLE),
        about.body_id(),
        escape_html(content::ABOUT_BODY)
    );

    let cta = Section::Cta;
    let _ = write!(
        html,
        "{}<h2 id=\"{}\" class=\"section-title\">{}</h2><div id=\"{}\" class=\"section-body\"><p>{}</p>\
         <a href=\"{}\" data-route=\"{}\" class=\"cta-button\">Kontakt aufnehmen</a></div></div></section>",
        section_open(cta, "cta"),
        cta.title_id(),
        escape_html(content::CTA_TITLE),
        cta.body_id(),
        escape_html(content::CTA_BODY),
        Route::Kontakt.path(),
        Route::Kontakt.path()
    );
    html
}

fn legal(route: Route, body: &str) -> String {
    format!(
        "<div class=\"page-card\"><h1>{}</h1>{}</div>",
        escape_html(route.title()),
        body
    )
}

fn kontakt() -> String {
    let owner = content::owner();
    format!(
        "<div class=\"page-card\"><h1>Kontakt</h1>\
         <p>Sie können mich gerne per E-Mail oder Telefon erreichen:</p>\
         <p><a href=\"mailto:{email}\">{email}</a></p>\
         <p><a href=\"tel:{tel}\">{phone}</a></p>\
         <p><a id=\"vcard-link\" href=\"{path}?{VCARD_PARAM}=true\">Kontaktkarte herunterladen</a></p></div>",
        email = escape_html(&owner.email),
        tel = owner.phone.replace(' ', ""),
        phone = escape_html(&owner.phone),
        path = Route::Kontakt.path(),
    )
}

fn not_found() -> String {
    format!(
        "<div class=\"page-card\"><h1>{}</h1><p><a href=\"/\" data-route=\"/\">Zur Startseite</a></p></div>",
        escape_html(Route::NotFound.title())
    )
}
