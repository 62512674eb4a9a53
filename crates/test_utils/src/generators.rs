//! Property-Based Test Generators
//!
//! Proptest strategies for random type graphs. A generated graph has `n`
//! source classes `Src{i}` and `n` destination classes `Dst{i}`. Each
//! member is described by a [`MemberShape`], which fixes both sides of the
//! member at once. Every graph declares `Src0 -> Dst0` plus a random subset
//! of the other pairs.

use proptest::collection::vec;
use proptest::prelude::*;

use core_kernel::{TypeDescriptor, TypeRef};

use crate::builders::{Scenario, ScenarioBuilder};

/// Class without a parameterless constructor used by [`MemberShape::Frozen`]
pub const FROZEN_TYPE: &str = "Frozen";
/// Source counterpart of [`FROZEN_TYPE`]
pub const FROZEN_SOURCE_TYPE: &str = "FrozenDto";

/// The shape of one member on both sides of a generated pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberShape {
    /// Same scalar type on both sides
    Scalar(ScalarKind),
    /// `Src{k}` on the source side, `Dst{k}` on the destination side
    Nested(usize),
    /// `List<Src{k}>` to `List<Dst{k}>`
    ListOf(usize),
    /// `Src{k}[]` to `List<Dst{k}>`
    ArrayToList(usize),
    /// Present only on the destination
    DestinationOnly,
    /// Present only on the source
    SourceOnly,
    /// Destination type cannot be constructed without arguments
    Frozen,
}

/// Scalar member types used by generated graphs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Text,
    Int,
    Money,
    OptionalMoney,
}

impl ScalarKind {
    fn type_ref(self) -> TypeRef {
        match self {
            ScalarKind::Text => TypeRef::string(),
            ScalarKind::Int => TypeRef::int32(),
            ScalarKind::Money => TypeRef::decimal(),
            ScalarKind::OptionalMoney => TypeRef::nullable(TypeRef::decimal()),
        }
    }
}

/// A generated graph before it is turned into a catalog
#[derive(Debug, Clone)]
pub struct GraphShape {
    pub members: Vec<Vec<MemberShape>>,
    pub declared: Vec<bool>,
}

impl GraphShape {
    pub fn type_count(&self) -> usize {
        self.members.len()
    }

    /// Builds the scenario described by this shape
    pub fn to_scenario(&self) -> Scenario {
        let mut builder = ScenarioBuilder::new()
            .with_type(TypeDescriptor::class(FROZEN_SOURCE_TYPE).property("Id", TypeRef::guid()))
            .with_type(
                TypeDescriptor::class(FROZEN_TYPE)
                    .property("Id", TypeRef::guid())
                    .without_parameterless_constructor(),
            );

        for (index, members) in self.members.iter().enumerate() {
            let mut source = TypeDescriptor::class(source_name(index));
            let mut destination = TypeDescriptor::class(destination_name(index));

            for (position, shape) in members.iter().enumerate() {
                let member = format!("M{position}");
                match shape {
                    MemberShape::Scalar(kind) => {
                        source = source.property(member.clone(), kind.type_ref());
                        destination = destination.property(member, kind.type_ref());
                    }
                    MemberShape::Nested(k) => {
                        source = source.property(member.clone(), TypeRef::named(source_name(*k)));
                        destination = destination.property(member, TypeRef::named(destination_name(*k)));
                    }
                    MemberShape::ListOf(k) => {
                        source = source.property(member.clone(), TypeRef::list(TypeRef::named(source_name(*k))));
                        destination =
                            destination.property(member, TypeRef::list(TypeRef::named(destination_name(*k))));
                    }
                    MemberShape::ArrayToList(k) => {
                        source = source.property(member.clone(), TypeRef::array(TypeRef::named(source_name(*k))));
                        destination =
                            destination.property(member, TypeRef::list(TypeRef::named(destination_name(*k))));
                    }
                    MemberShape::DestinationOnly => {
                        destination = destination.property(member, TypeRef::string());
                    }
                    MemberShape::SourceOnly => {
                        source = source.property(member, TypeRef::string());
                    }
                    MemberShape::Frozen => {
                        source = source.property(member.clone(), TypeRef::named(FROZEN_SOURCE_TYPE));
                        destination = destination.property(member, TypeRef::named(FROZEN_TYPE));
                    }
                }
            }

            builder = builder.with_type(source).with_type(destination);
        }

        for (index, declared) in self.declared.iter().enumerate() {
            if index == 0 || *declared {
                builder = builder.declare(&source_name(index), &destination_name(index));
            }
        }

        builder.build()
    }
}

pub fn source_name(index: usize) -> String {
    format!("Src{index}")
}

pub fn destination_name(index: usize) -> String {
    format!("Dst{index}")
}

/// Strategy for scalar member types
pub fn scalar_kind_strategy() -> impl Strategy<Value = ScalarKind> {
    prop_oneof![
        Just(ScalarKind::Text),
        Just(ScalarKind::Int),
        Just(ScalarKind::Money),
        Just(ScalarKind::OptionalMoney),
    ]
}

/// Strategy for member shapes in a graph of `type_count` pairs
pub fn member_shape_strategy(type_count: usize) -> impl Strategy<Value = MemberShape> {
    prop_oneof![
        3 => scalar_kind_strategy().prop_map(MemberShape::Scalar),
        2 => (0..type_count).prop_map(MemberShape::Nested),
        1 => (0..type_count).prop_map(MemberShape::ListOf),
        1 => (0..type_count).prop_map(MemberShape::ArrayToList),
        1 => Just(MemberShape::DestinationOnly),
        1 => Just(MemberShape::SourceOnly),
        1 => Just(MemberShape::Frozen),
    ]
}

/// Strategy for whole graph shapes
pub fn graph_shape_strategy() -> impl Strategy<Value = GraphShape> {
    (1usize..6).prop_flat_map(|type_count| {
        (
            vec(vec(member_shape_strategy(type_count), 0..5), type_count),
            vec(any::<bool>(), type_count),
        )
            .prop_map(|(members, declared)| GraphShape { members, declared })
    })
}

/// Strategy for scenarios built from random graph shapes
pub fn scenario_strategy() -> impl Strategy<Value = Scenario> {
    graph_shape_strategy().prop_map(|shape| shape.to_scenario())
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn test_generated_shapes_build_catalogs(shape in graph_shape_strategy()) {
            let scenario = shape.to_scenario();
            prop_assert_eq!(scenario.catalog.len(), shape.type_count() * 2 + 2);
            prop_assert!(!scenario.rules.is_empty());
        }
    }
}
