//! Test Fixtures
//!
//! Pre-defined scenarios for the situations the synthesizer must handle.
//! Each fixture is a catalog plus a set of declared rules.

use once_cell::sync::Lazy;

use core_kernel::{TypeDescriptor, TypeRef};

use crate::builders::{Scenario, ScenarioBuilder};

/// Scenario fixtures keyed by the situation they exercise
pub struct ScenarioFixtures;

impl ScenarioFixtures {
    /// Two flat types with one declared rule; `Destination.Extra` has no source
    pub fn flat_dto() -> Scenario {
        ScenarioBuilder::new()
            .with_type(
                TypeDescriptor::class("SourceDto")
                    .property("Name", TypeRef::string())
                    .property("Count", TypeRef::int32()),
            )
            .with_type(
                TypeDescriptor::class("Destination")
                    .property("Name", TypeRef::string())
                    .property("Count", TypeRef::int32())
                    .property("Extra", TypeRef::string()),
            )
            .declare("SourceDto", "Destination")
            .build()
    }

    /// A declared rule whose nested member pair has no rule
    pub fn nested_gap() -> Scenario {
        ScenarioBuilder::new()
            .with_type(TypeDescriptor::class("Outer").property("Inner", TypeRef::named("InnerDto")))
            .with_type(TypeDescriptor::class("OuterContract").property("Inner", TypeRef::named("InnerContract")))
            .with_type(TypeDescriptor::class("InnerDto").property("Value", TypeRef::decimal()))
            .with_type(
                TypeDescriptor::class("InnerContract")
                    .property("Value", TypeRef::decimal())
                    .property("Extra", TypeRef::string()),
            )
            .declare("Outer", "OuterContract")
            .build()
    }

    /// Same as [`nested_gap`](Self::nested_gap) but the nested destination
    /// cannot be constructed without arguments
    pub fn non_constructible_member() -> Scenario {
        ScenarioBuilder::new()
            .with_type(TypeDescriptor::class("Outer").property("Inner", TypeRef::named("InnerDto")))
            .with_type(TypeDescriptor::class("OuterContract").property("Inner", TypeRef::named("InnerContract")))
            .with_type(TypeDescriptor::class("InnerDto").property("Value", TypeRef::decimal()))
            .with_type(
                TypeDescriptor::class("InnerContract")
                    .property("Value", TypeRef::decimal())
                    .without_parameterless_constructor(),
            )
            .declare("Outer", "OuterContract")
            .build()
    }

    /// A declared rule whose members are lists of unmapped element types
    pub fn enumerable_member() -> Scenario {
        ScenarioBuilder::new()
            .with_type(TypeDescriptor::class("A").property("Items", TypeRef::list(TypeRef::named("X"))))
            .with_type(TypeDescriptor::class("B").property("Items", TypeRef::list(TypeRef::named("Y"))))
            .with_type(TypeDescriptor::class("X").property("Code", TypeRef::string()))
            .with_type(TypeDescriptor::class("Y").property("Code", TypeRef::string()))
            .declare("A", "B")
            .build()
    }

    /// A declared rule whose member pair maps a type to itself
    pub fn identity_member() -> Scenario {
        ScenarioBuilder::new()
            .with_type(TypeDescriptor::class("Shared").property("Code", TypeRef::string()))
            .with_type(TypeDescriptor::class("Left").property("Shared", TypeRef::named("Shared")))
            .with_type(TypeDescriptor::class("Right").property("Shared", TypeRef::named("Shared")))
            .declare("Left", "Right")
            .build()
    }

    /// A declared rule with a redirected member whose source type differs
    /// from the same-named source property
    pub fn redirected_member() -> Scenario {
        ScenarioBuilder::new()
            .with_type(
                TypeDescriptor::class("PolicyDto")
                    .property("Holder", TypeRef::string())
                    .property("PrimaryInsured", TypeRef::named("PersonDto")),
            )
            .with_type(TypeDescriptor::class("Policy").property("Holder", TypeRef::named("Person")))
            .with_type(TypeDescriptor::class("PersonDto").property("Name", TypeRef::string()))
            .with_type(TypeDescriptor::class("Person").property("Name", TypeRef::string()))
            .declare("PolicyDto", "Policy")
            .mapping_from("Holder", "PrimaryInsured")
            .build()
    }
}

/// A self-referencing graph shared across tests
pub static LINKED_LIST: Lazy<Scenario> = Lazy::new(|| {
    ScenarioBuilder::new()
        .with_type(
            TypeDescriptor::class("NodeDto")
                .property("Value", TypeRef::int32())
                .property("Next", TypeRef::named("NodeDto"))
                .property("Children", TypeRef::list(TypeRef::named("NodeDto"))),
        )
        .with_type(
            TypeDescriptor::class("Node")
                .property("Value", TypeRef::int32())
                .property("Next", TypeRef::named("Node"))
                .property("Children", TypeRef::list(TypeRef::named("Node"))),
        )
        .with_type(TypeDescriptor::class("ChainDto").property("Head", TypeRef::named("NodeDto")))
        .with_type(TypeDescriptor::class("Chain").property("Head", TypeRef::named("Node")))
        .declare("ChainDto", "Chain")
        .build()
});
