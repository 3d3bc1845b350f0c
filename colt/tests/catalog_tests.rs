use std::sync::Arc;

use colt::block::{Block, BlockBuilder, VariableWidthBlockBuilder, block_from_array};
use colt::{Error, ErrorCode, TypeRegistry, TypeSignature};

#[test]
fn column_copy_through_erased_arrays() {
    let registry = TypeRegistry::with_standard_types().unwrap();
    let ty = registry.resolve(&TypeSignature::varchar(8)).unwrap();

    let mut builder = VariableWidthBlockBuilder::new();
    ty.write_slice(&mut builder, b"north").unwrap();
    builder.append_null().unwrap();
    ty.write_slice(&mut builder, b"south").unwrap();
    let array: arrow::array::ArrayRef = Arc::new(builder.finish().unwrap());

    let source = block_from_array(array.as_ref()).unwrap();
    let mut copy = VariableWidthBlockBuilder::new();
    for pos in 0..source.position_count() {
        ty.append_to(source, pos, &mut copy).unwrap();
    }
    let copy = copy.finish().unwrap();

    assert!(ty.equal_to(source, 0, &copy, 0).unwrap());
    assert!(Block::is_null(&copy, 1).unwrap());
    assert_eq!(
        ty.object_value(&copy, 2).unwrap().unwrap().as_str(),
        Some("south")
    );
}

#[test]
fn catalog_conditions_surface_codes() {
    let registry = TypeRegistry::with_standard_types().unwrap();
    let err = registry.register(Arc::new(colt::varchar().clone())).unwrap_err();
    assert_eq!(err.code(), ErrorCode::AlreadyExists);

    let err = Error::schema_already_exists("public", None);
    assert_eq!(err.to_string(), "Schema public already exists.");
    assert_eq!(err.code().name(), "ALREADY_EXISTS");
}
