//! Hand-written entities with the shape `#[derive(Accessors)]` generates.

use crate::{
    accessor::Accessor,
    model::{EntityModel, FieldCardinality, FieldModel},
    traits::{EntityKind, Traverse},
};

///
/// Person
///

#[derive(Clone, Debug, Default)]
pub(crate) struct Person {
    pub(crate) name: String,
    pub(crate) age: u32,
    pub(crate) active: bool,
    pub(crate) id_card: IdCard,
    pub(crate) addresses: Vec<Address>,
}

impl Person {
    pub(crate) const fn get_name(&self) -> &String {
        &self.name
    }

    pub(crate) fn set_name(&mut self, value: String) {
        self.name = value;
    }

    pub(crate) const fn get_age(&self) -> &u32 {
        &self.age
    }

    pub(crate) const fn is_active(&self) -> &bool {
        &self.active
    }

    pub(crate) const fn get_id_card(&self) -> &IdCard {
        &self.id_card
    }

    pub(crate) const fn get_addresses(&self) -> &Vec<Address> {
        &self.addresses
    }

    // computed, not backed by a field
    pub(crate) const fn get_nickname(&self) -> &String {
        &self.name
    }
}

impl EntityKind for Person {
    const MODEL: &'static EntityModel = &EntityModel {
        path: "test_fixtures::Person",
        entity_name: "Person",
        fields: &[
            FieldModel::new("name", FieldCardinality::One),
            FieldModel::new("age", FieldCardinality::One),
            FieldModel::new("active", FieldCardinality::One),
            FieldModel::new("id_card", FieldCardinality::One),
            FieldModel::new("addresses", FieldCardinality::Many),
        ],
    };
}

impl Traverse for Person {
    type Target = Self;
}

pub(crate) static PERSON_NAME: Accessor<Person, String> =
    Accessor::getter("get_name", Person::get_name);
pub(crate) static PERSON_SET_NAME: Accessor<Person, String> =
    Accessor::setter("set_name", Person::set_name);
pub(crate) static PERSON_AGE: Accessor<Person, u32> = Accessor::getter("get_age", Person::get_age);
pub(crate) static PERSON_ACTIVE: Accessor<Person, bool> =
    Accessor::getter("is_active", Person::is_active);
pub(crate) static PERSON_ID_CARD: Accessor<Person, IdCard> =
    Accessor::getter("get_id_card", Person::get_id_card);
pub(crate) static PERSON_ADDRESSES: Accessor<Person, Vec<Address>> =
    Accessor::getter("get_addresses", Person::get_addresses);
pub(crate) static PERSON_NICKNAME: Accessor<Person, String> =
    Accessor::getter("get_nickname", Person::get_nickname);
pub(crate) static PERSON_NAME_INLINE: Accessor<Person, String> =
    Accessor::inline(|person| &person.name);

// second static for the same method; must not share a cache slot
pub(crate) static PERSON_NAME_AGAIN: Accessor<Person, String> =
    Accessor::getter("get_name", Person::get_name);

///
/// IdCard
///

#[derive(Clone, Debug, Default)]
pub(crate) struct IdCard {
    pub(crate) number: String,
    pub(crate) person: Option<Box<Person>>,
}

impl IdCard {
    pub(crate) const fn get_number(&self) -> &String {
        &self.number
    }

    pub(crate) const fn get_person(&self) -> &Option<Box<Person>> {
        &self.person
    }
}

impl EntityKind for IdCard {
    const MODEL: &'static EntityModel = &EntityModel {
        path: "test_fixtures::IdCard",
        entity_name: "IdCard",
        fields: &[
            FieldModel::new("number", FieldCardinality::One),
            FieldModel::new("person", FieldCardinality::Opt),
        ],
    };
}

impl Traverse for IdCard {
    type Target = Self;
}

pub(crate) static ID_CARD_NUMBER: Accessor<IdCard, String> =
    Accessor::getter("get_number", IdCard::get_number);
pub(crate) static ID_CARD_PERSON: Accessor<IdCard, Option<Box<Person>>> =
    Accessor::getter("get_person", IdCard::get_person);

///
/// Address
///

#[derive(Clone, Debug, Default)]
pub(crate) struct Address {
    pub(crate) city: String,
}

impl Address {
    pub(crate) const fn get_city(&self) -> &String {
        &self.city
    }
}

impl EntityKind for Address {
    const MODEL: &'static EntityModel = &EntityModel {
        path: "test_fixtures::Address",
        entity_name: "Address",
        fields: &[FieldModel::new("city", FieldCardinality::One)],
    };
}

impl Traverse for Address {
    type Target = Self;
}

pub(crate) static ADDRESS_CITY: Accessor<Address, String> =
    Accessor::getter("get_city", Address::get_city);
