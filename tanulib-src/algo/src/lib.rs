use inner::reexport;

reexport! {
    locate,
    bound_search,
    sorting,
}
