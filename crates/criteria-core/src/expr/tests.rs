use super::*;

#[test]
fn attribute_walks_joins_with_configured_kind() {
    let mut builder = FilterBuilder::new();
    let attr = builder.attribute(&FieldPath::from("id_card.person.name"), JoinKind::Inner);

    assert_eq!(
        attr,
        AttrPath {
            joins: vec![
                Join {
                    field: "id_card".to_string(),
                    kind: JoinKind::Inner,
                },
                Join {
                    field: "person".to_string(),
                    kind: JoinKind::Inner,
                },
            ],
            field: "name".to_string(),
        }
    );
}

#[test]
fn combine_dispatches_on_operator() {
    let mut builder = FilterBuilder::new();
    let attr = AttrPath::root("age");
    let a = builder.greater_than(&attr, &Value::Int(1));
    let b = builder.less_than(&attr, &Value::Int(9));

    let and = builder.combine(BooleanOp::And, vec![a.clone(), b.clone()]);
    let or = builder.combine(BooleanOp::Or, vec![a.clone(), b.clone()]);

    assert_eq!(and, a.clone() & b.clone());
    assert_eq!(or, a | b);
}

#[test]
fn leaf_count_sees_through_groups() {
    let attr = AttrPath::root("x");
    let leaf = Filter::IsNull { attr };
    let tree = !(leaf.clone() & (leaf.clone() | leaf));

    assert_eq!(tree.leaf_count(), 3);
}

#[test]
fn filter_serializes_with_snake_case_tags() {
    let filter = Filter::compare(AttrPath::root("age"), CompareOp::Gte, Value::Int(18));
    let json = serde_json::to_value(&filter).expect("serialize filter");

    assert_eq!(json["Compare"]["op"], "gte");
    assert_eq!(json["Compare"]["attr"]["field"], "age");
}

#[test]
fn sort_with_an_empty_path_does_not_deserialize() {
    let sort = Sort {
        orders: vec![Order::desc(FieldPath::from("score"))],
    };
    let mut json = serde_json::to_value(&sort).expect("serialize sort");

    assert_eq!(serde_json::from_value::<Sort>(json.clone()).expect("round trip"), sort);

    json["orders"][0]["path"]["segments"] = serde_json::json!([]);
    assert!(serde_json::from_value::<Sort>(json).is_err());
}
