use inner::reexport;

reexport! {
    aa_tree,
    ordered_set,
    ordered_map,
}
