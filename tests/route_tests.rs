// Host-side tests for path routing and the vcard query flag.

use interim_site::core::route::{strip_vcard_param, wants_vcard};
use interim_site::core::Route;

#[test]
fn known_paths_resolve() {
    assert_eq!(Route::from_path("/"), Route::Home);
    assert_eq!(Route::from_path(""), Route::Home);
    assert_eq!(Route::from_path("/index.html"), Route::Home);
    assert_eq!(Route::from_path("/impressum"), Route::Impressum);
    assert_eq!(Route::from_path("/datenschutz/"), Route::Datenschutz);
    assert_eq!(Route::from_path("/terms"), Route::Terms);
    assert_eq!(Route::from_path("/kontakt"), Route::Kontakt);
}

#[test]
fn unknown_paths_are_not_found() {
    assert_eq!(Route::from_path("/kontakt/extra"), Route::NotFound);
    assert_eq!(Route::from_path("/Impressum"), Route::NotFound);
    assert_eq!(Route::from_path("/404"), Route::NotFound);
}

#[test]
fn every_route_links_to_itself() {
    for route in Route::ALL {
        assert_eq!(Route::from_path(route.path()), route, "{route:?}");
        assert!(!route.title().is_empty());
    }
}

#[test]
fn only_home_animates() {
    assert!(Route::Home.animates());
    for route in [Route::Impressum, Route::Datenschutz, Route::Terms, Route::Kontakt, Route::NotFound] {
        assert!(!route.animates(), "{route:?}");
    }
}

#[test]
fn vcard_flag_is_detected() {
    assert!(wants_vcard("?vcard=true"));
    assert!(wants_vcard("vcard=TRUE"));
    assert!(wants_vcard("?lang=de&vcard=true"));
    assert!(!wants_vcard(""));
    assert!(!wants_vcard("?vcard=false"));
    assert!(!wants_vcard("?vcard"));
    assert!(!wants_vcard("?novcard=true"));
}

#[test]
fn vcard_flag_is_stripped_and_others_kept() {
    assert_eq!(strip_vcard_param("?vcard=true"), "");
    assert_eq!(strip_vcard_param(""), "");
    assert_eq!(strip_vcard_param("?lang=de&vcard=true"), "?lang=de");
    assert_eq!(strip_vcard_param("?vcard=true&a=1&b"), "?a=1&b");
}
