// Host-side tests for the page markup. The track tables address elements by
// id, so every id they use has to be present in the rendered home page.

use interim_site::core::sections::section_tracks;
use interim_site::core::{Route, Section, LOGO_ID, LOGO_STAGES};
use interim_site::pages;

fn id_count(html: &str, id: &str) -> usize {
    html.matches(&format!("id=\"{id}\"")).count()
}

#[test]
fn every_tracked_element_exists_once() {
    let html = pages::home();
    for section in Section::ALL {
        for track in section_tracks(section) {
            assert_eq!(id_count(&html, track.trigger), 1, "trigger {}", track.trigger);
            for binding in &track.bindings {
                assert_eq!(id_count(&html, binding.target), 1, "target {}", binding.target);
            }
        }
    }
    for stage in &LOGO_STAGES {
        assert_eq!(id_count(&html, stage.trigger), 1, "logo trigger {}", stage.trigger);
    }
    assert_eq!(id_count(&html, LOGO_ID), 1);
}

#[test]
fn sections_appear_in_page_order() {
    let html = pages::home();
    let positions: Vec<usize> = Section::ALL
        .iter()
        .map(|s| html.find(&format!("id=\"{}\"", s.id())).expect("section rendered"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn nav_links_every_nav_section() {
    let html = pages::nav_bar(Route::Home);
    for section in Section::NAV {
        assert!(html.contains(&format!("data-section=\"{}\"", section.id())));
        assert!(html.contains(&format!("href=\"/#{}\"", section.id())));
    }
    assert!(html.contains("data-scroll-top"));
    assert!(!html.contains("aria-current"));
    assert!(pages::nav_bar(Route::Kontakt).contains("aria-current=\"page\""));
}

#[test]
fn every_route_renders_nav_main_and_footer() {
    for route in Route::ALL.into_iter().chain([Route::NotFound]) {
        let html = pages::render(route);
        assert!(html.starts_with("<nav"), "{route:?}");
        assert!(html.contains("<main id=\"page\">"), "{route:?}");
        assert!(html.ends_with("</footer>"), "{route:?}");
    }
}

#[test]
fn footer_links_the_legal_pages() {
    let html = pages::footer();
    for route in [Route::Impressum, Route::Datenschutz, Route::Terms, Route::Kontakt] {
        assert!(html.contains(&format!("data-route=\"{}\"", route.path())));
    }
}

#[test]
fn contact_page_offers_the_card() {
    let html = pages::render(Route::Kontakt);
    assert!(html.contains("id=\"vcard-link\" href=\"/kontakt?vcard=true\""));
    assert!(html.contains("mailto:Tedoradze.merab@web.de"));
    assert!(html.contains("tel:+491777376989"));
}

#[test]
fn not_found_links_home() {
    let html = pages::render(Route::NotFound);
    assert!(html.contains(Route::NotFound.title()));
    assert!(html.contains("data-route=\"/\""));
}

#[test]
fn intro_overlay_has_both_layers() {
    let html = pages::intro_overlay();
    assert_eq!(id_count(&html, "logo-intro"), 1);
    assert_eq!(id_count(&html, "logo-intro-blur"), 1);
}

#[test]
fn text_is_escaped() {
    assert_eq!(
        pages::escape_html("<a href=\"x\">Q&A</a>"),
        "&lt;a href=&quot;x&quot;&gt;Q&amp;A&lt;/a&gt;"
    );
}
