use product_query::{Category, Ddr, LaptopsQuery, Presence, ProductQuery, QueryValue, RamQuery};

#[test]
fn laptops_query_with_min_price_and_ram() {
    let mut query = ProductQuery::empty(Category::Laptop);
    query.min_price = Some(500);
    query.variant = LaptopsQuery { ram: Some(8) }.into();

    assert_eq!(query.category(), Category::Laptop);
    assert_eq!(query.to_url_query(), "minPrice=500&ram=8");
}

#[test]
fn laptops_query_keeps_declaration_order() {
    let query = ProductQuery::new(LaptopsQuery { ram: Some(32) })
        .with_min_price(700)
        .with_max_price(2500);
    assert_eq!(query.to_url_query(), "minPrice=700&maxPrice=2500&ram=32");
}

#[test]
fn fields_list_every_field_in_order() {
    let query = ProductQuery::empty(Category::Ram);
    let keys: Vec<&str> = query.fields().into_iter().map(|(key, _)| key).collect();
    assert_eq!(keys, ["minPrice", "maxPrice", "brand", "lastId", "capacity", "ddr"]);
}

#[test]
fn parsed_query_serializes_back() {
    let raw = "minPrice=100&maxPrice=400&brand=corsair,kingston&lastId=65f0&capacity=16&ddr=DDR4";
    let query = ProductQuery::parse(Category::Ram, raw).unwrap();
    assert_eq!(query.to_url_query(), raw);
}

#[test]
fn serialized_query_parses_back() {
    let query = ProductQuery::new(RamQuery::default().with_capacity(64).with_ddr(Ddr::DDR5))
        .with_max_price(300)
        .with_brand("gskill");
    let parsed = ProductQuery::parse(query.category(), &query.to_url_query()).unwrap();
    assert_eq!(parsed, query);
}

#[test]
fn zero_bounds_follow_presence_policy() {
    let query = ProductQuery::new(LaptopsQuery { ram: Some(0) }).with_min_price(0);
    assert_eq!(query.to_url_query(), "");
    assert_eq!(query.to_url_query_with(Presence::Defined), "minPrice=0&ram=0");
}

#[test]
fn pairs_only_hold_emitted_values() {
    let query = ProductQuery::empty(Category::Laptop)
        .with_brand("dell")
        .with_brand("hp")
        .with_max_price(0);
    assert_eq!(query.pairs(Presence::Truthy), [("brand", "dell,hp".to_string())]);
    for (key, value) in query.fields() {
        if let Some(QueryValue::List(items)) = value {
            assert_eq!(key, "brand");
            assert_eq!(items, ["dell", "hp"]);
        }
    }
}

#[test]
fn page_parameters_of_other_widgets_are_ignored() {
    let query = ProductQuery::parse(Category::Laptop, "sort=a&sort=b&ram=8").unwrap();
    assert_eq!(query, ProductQuery::new(LaptopsQuery { ram: Some(8) }));
}
