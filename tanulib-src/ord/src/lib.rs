use inner::reexport;

reexport! {
    compare,
}
