use inner::reexport;

reexport! {
    own_box,
}
