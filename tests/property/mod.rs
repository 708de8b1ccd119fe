pub mod registry_props;
