use design_patterns::robot::{NoFly, NoTalk, NoWalk, NormalFly, NormalTalk, NormalWalk};
use design_patterns::storage::{open_backend, StorageConfig};
use design_patterns::{
    creator_for, Backend, BurgerFactory, DemoConfig, Document, DocumentEditor, Family, InvoicePrinter, Preparable,
    Robot, Tier,
};

#[test]
fn simple_factory_scenario() {
    let factory = BurgerFactory::new();

    let served: Vec<String> = ["basic", "premium", "meal", "standard"]
        .iter()
        .filter_map(|key| factory.create(key))
        .map(|burger| burger.preparation())
        .collect();

    assert_eq!(
        served,
        vec![
            "we are prepare basic burger for you please wait!!!",
            "we are prepare premium burger for you please wait!!!",
            "we are prepare Standard burger for you please wait!!!",
        ]
    );
}

#[test]
fn factory_method_swaps_family_at_same_call_site() {
    let order = |family: Family| creator_for(family).create_burger("standard").map(|b| b.preparation());

    assert_eq!(
        order(Family::Wheat).as_deref(),
        Some("we are prepare Standard Wheat burger for you please wait!!!")
    );
    assert_eq!(
        order(Family::Regular).as_deref(),
        Some("we are prepare Standard burger for you please wait!!!")
    );
    assert!(creator_for(Family::Wheat).create_burger("meal").is_none());
}

#[test]
fn every_tier_key_parses_back() {
    for tier in Tier::ALL {
        assert_eq!(tier.key().parse::<Tier>(), Ok(tier));
        assert_eq!(tier.to_string(), tier.key());
    }
}

#[test]
fn srp_invoice_from_default_config() {
    let cart = DemoConfig::default().cart();
    let invoice = InvoicePrinter::new(&cart).invoice();
    assert_eq!(invoice.lines().last(), Some("Total Bill : 300"));
}

#[test]
fn robots_mix_capabilities() {
    let drone = Robot::drone(NoTalk, NoWalk, NormalFly);
    let worker = Robot::worker(NormalTalk, NormalWalk, NoFly);

    assert_eq!(
        [drone.talk().performed, drone.walk().performed, drone.fly().performed],
        [false, false, true]
    );
    assert_eq!(
        [worker.talk().performed, worker.walk().performed, worker.fly().performed],
        [true, true, false]
    );
}

#[test]
fn editor_saves_through_configured_backend() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorageConfig {
        backend: Backend::File,
        path: dir.path().join("document.txt"),
    };

    let mut editor = DocumentEditor::new(Document::new(), open_backend(&config));
    editor.add_text("title");
    editor.add_new_line();
    editor.add_image("cover.png");

    let rendered = editor.render_document().to_string();
    editor.save().unwrap();

    assert_eq!(rendered, "title\n[Image:cover.png]");
    assert_eq!(std::fs::read_to_string(&config.path).unwrap(), rendered);
    assert_eq!(editor.render_count(), 1);
}
