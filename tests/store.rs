use reactgraph::store::{RestoreError, SubstanceData};
use reactgraph::{
    Equation, Formula, KeyValueStore, MemoryStorage, Point, Store, StoreConfig, StoreError,
    Substance, SubstanceId,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn formula(s: &str) -> Formula {
    Formula::parse(s).unwrap()
}

fn equation(s: &str) -> Equation {
    Equation::parse(s).unwrap()
}

fn id(store: &Store, s: &str) -> SubstanceId {
    store
        .find_substance(&formula(s))
        .unwrap_or_else(|| panic!("{s} not tracked"))
}

// ---------------------------------------------------------------------------
// Graph through the store
// ---------------------------------------------------------------------------

#[test]
fn sample_network_adjacency() {
    init_logging();
    let store = Store::with_sample_data();
    let co2 = id(&store, "CO2");
    let h2o = id(&store, "H2O");
    let h2co3 = id(&store, "H2CO3");
    let caoh2 = id(&store, "Ca(OH)2");
    let caco3 = id(&store, "CaCO3");

    // CO2+H2O=H2CO3 then CO2+Ca(OH)2=CaCO3+H2O.
    assert_eq!(store.graph().co_reactants(co2), vec![h2o, h2o, caoh2, caoh2]);
    assert_eq!(store.graph().products(co2), vec![h2co3, caco3, h2o]);
    // H2CO3=CO2+H2O has a single reactant, so only product edges.
    assert!(store.graph().co_reactants(h2co3).is_empty());
    assert_eq!(store.graph().products(h2co3), vec![co2, h2o]);
}

#[test]
fn repeated_reactant_pairs_stack_up() {
    init_logging();
    let mut store = Store::default();
    let a = store.add_substance(Substance::new(formula("CO2"))).unwrap();
    let b = store.add_substance(Substance::new(formula("H2O"))).unwrap();
    store.add_equation(equation("CO2+H2O=H2CO3")).unwrap();
    store
        .add_equation(equation("CO2+H2O=H2CO3").with_description("again, with a note"))
        .unwrap();

    assert_eq!(store.graph().co_reactants(a), vec![b; 4]);
    assert_eq!(store.graph().co_reactants(b), vec![a; 4]);
    // H2CO3 is not tracked.
    assert!(store.graph().products(a).is_empty());
}

#[test]
fn untracked_substances_are_skipped() {
    init_logging();
    let mut store = Store::default();
    store.add_equation(equation("2H2+O2=点燃=2H2O")).unwrap();
    let o2 = store.add_substance(Substance::new(formula("O2"))).unwrap();
    assert!(store.graph().co_reactants(o2).is_empty());
    assert!(store.graph().products(o2).is_empty());

    let h2o = store.add_substance(Substance::new(formula("H2O"))).unwrap();
    assert_eq!(store.graph().products(o2), vec![h2o]);
}

// ---------------------------------------------------------------------------
// Persistence
// ---------------------------------------------------------------------------

#[test]
fn save_and_load() {
    init_logging();
    let mut storage = MemoryStorage::new();
    let mut store = Store::with_sample_data();
    store.move_substance(SubstanceId::new(2), Point::new(120.0, -40.0));
    store.view_mut().zoom = 2.5;
    store.save(&mut storage).unwrap();
    assert!(storage.get("chemistry-inference").is_some());

    let mut loaded = Store::default();
    assert!(loaded.load(&storage).unwrap());
    assert_eq!(loaded.equations(), store.equations());
    assert_eq!(loaded.substances(), store.substances());
    assert_eq!(loaded.view(), store.view());
    assert_eq!(loaded.graph().edge_count(), store.graph().edge_count());
}

#[test]
fn load_from_empty_storage() {
    init_logging();
    let storage = MemoryStorage::new();
    let mut store = Store::with_sample_data();
    assert!(!store.load(&storage).unwrap());
    assert_eq!(store.substances().len(), 6);
}

#[test]
fn custom_storage_key() {
    init_logging();
    let mut storage = MemoryStorage::new();
    let store = Store::new(
        StoreConfig::default()
            .with_storage_key("lab-notes")
            .with_sample_data(true),
    );
    store.save(&mut storage).unwrap();
    assert!(storage.get("lab-notes").is_some());
    assert!(storage.get("chemistry-inference").is_none());

    // A default store looks under the default key and finds nothing.
    assert!(!Store::default().load(&storage).unwrap());
}

#[test]
fn corrupt_storage_leaves_store_alone() {
    init_logging();
    let mut storage = MemoryStorage::new();
    storage.set("chemistry-inference", "{ not json".to_string());

    let mut store = Store::with_sample_data();
    let err = store.load(&storage).unwrap_err();
    assert!(matches!(
        err,
        StoreError::RestoreIntegrity(RestoreError::Malformed(_))
    ));
    assert_eq!(store.equations().len(), 4);
}

#[test]
fn restore_rejects_unknown_element_atomically() {
    init_logging();
    let mut store = Store::with_sample_data();
    let before = store.to_document();

    let json = r#"{
        "equations": [],
        "substances": [
            { "formula": { "value": [ { "el": "H", "quantity": 2 } ] }, "pos": { "x": 0, "y": 0 } },
            { "formula": { "value": [ { "el": "Xx", "quantity": 1 } ] }, "pos": { "x": 0, "y": 0 } }
        ]
    }"#;
    let err = store.restore_json(json).unwrap_err();
    assert!(matches!(
        err,
        StoreError::RestoreIntegrity(RestoreError::Integrity(_))
    ));
    assert_eq!(store.to_document(), before);
}

#[test]
fn restore_rejects_zero_quantity() {
    init_logging();
    let mut store = Store::default();
    let json = r#"{
        "equations": [],
        "substances": [
            { "formula": { "value": [ { "el": "O", "quantity": 0 } ] } }
        ]
    }"#;
    assert!(store.restore_json(json).is_err());
    assert!(store.substances().is_empty());
}

#[test]
fn restore_accepts_document_written_elsewhere() {
    init_logging();
    let json = r#"{
        "equations": [
            {
                "reactant": [
                    { "coef": 1, "formula": { "value": [ { "el": "Ca", "quantity": 1 }, { "el": "O", "quantity": 1 } ], "description": "" } },
                    { "coef": 1, "formula": { "value": [ { "el": "H", "quantity": 2 }, { "el": "O", "quantity": 1 } ], "description": "" } }
                ],
                "product": [
                    { "coef": 1, "style": "", "formula": { "value": [ { "el": "Ca", "quantity": 1 }, { "el": [ { "el": "O", "quantity": 1 }, { "el": "H", "quantity": 1 } ], "quantity": 2 } ], "description": "slaked lime" } }
                ],
                "condition": "",
                "description": "",
                "hidden": false
            }
        ],
        "substances": [
            { "formula": { "value": [ { "el": "Ca", "quantity": 1 }, { "el": "O", "quantity": 1 } ] }, "pos": { "x": 10, "y": 20 } },
            { "formula": { "value": [ { "el": "Ca", "quantity": 1 }, { "el": [ { "el": "O", "quantity": 1 }, { "el": "H", "quantity": 1 } ], "quantity": 2 } ] }, "pos": { "x": 30, "y": 40 } }
        ],
        "view": { "originOffset": { "x": 5, "y": 5 }, "zoom": 1.5 }
    }"#;

    let mut store = Store::default();
    store.restore_json(json).unwrap();
    assert_eq!(store.equations()[0].to_string(), "CaO+H2O=Ca(OH)2");
    assert_eq!(store.substances()[1].position, Point::new(30.0, 40.0));
    assert_eq!(store.view().zoom, 1.5);

    let cao = id(&store, "CaO");
    let caoh2 = id(&store, "Ca(OH)2");
    assert_eq!(store.graph().products(cao), vec![caoh2]);
}

#[test]
fn document_shape() {
    init_logging();
    let mut store = Store::default();
    store
        .add_substance(Substance::at(formula("CO2"), Point::new(1.0, 2.0)))
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&store.to_json().unwrap()).unwrap();
    assert_eq!(
        value["substances"][0],
        serde_json::json!({
            "formula": {
                "value": [ { "el": "C", "quantity": 1 }, { "el": "O", "quantity": 2 } ],
                "description": ""
            },
            "pos": { "x": 1.0, "y": 2.0 }
        })
    );

    let data: SubstanceData = serde_json::from_value(value["substances"][0].clone()).unwrap();
    assert_eq!(Substance::from_data(&data).unwrap(), store.substances()[0]);
}
