use inner::reexport;

reexport! {
    sequence,
    array_seq,
    flat_deque,
    cursor_list,
}
