use super::*;

#[test]
fn empty_text_still_has_one_line() {
    let buf = EditBuffer::from_text("");
    assert_eq!(buf.lines, vec![String::new()]);
    assert_eq!(buf.text(), "\n");
}

#[test]
fn newline_splits_at_the_cursor() {
    let mut buf = EditBuffer::from_text("hello world");
    for _ in 0..5 {
        buf.move_right();
    }
    buf.insert_newline();
    assert_eq!(buf.lines, vec!["hello", " world"]);
    assert_eq!((buf.row, buf.col), (1, 0));
    assert!(buf.dirty);
}

#[test]
fn backspace_at_line_start_joins_with_previous() {
    let mut buf = EditBuffer::from_text("ab\ncd");
    buf.move_down();
    buf.backspace();
    assert_eq!(buf.lines, vec!["abcd"]);
    assert_eq!((buf.row, buf.col), (0, 2));
}

#[test]
fn delete_at_line_end_pulls_the_next_line_up() {
    let mut buf = EditBuffer::from_text("ab\ncd");
    buf.move_end();
    buf.delete();
    assert_eq!(buf.lines, vec!["abcd"]);
}

#[test]
fn vertical_moves_clamp_the_column() {
    let mut buf = EditBuffer::from_text("long line\nx");
    buf.move_end();
    buf.move_down();
    assert_eq!((buf.row, buf.col), (1, 1));
    buf.move_up();
    assert_eq!((buf.row, buf.col), (0, 1));
}

#[test]
fn multibyte_characters_edit_by_char() {
    let mut buf = EditBuffer::from_text("héllo");
    buf.move_right();
    buf.move_right();
    buf.backspace();
    assert_eq!(buf.lines[0], "hllo");
    buf.insert_char('é');
    assert_eq!(buf.lines[0], "héllo");
    assert_eq!(buf.text(), "héllo\n");
}

#[test]
fn arrows_wrap_across_lines() {
    let mut buf = EditBuffer::from_text("a\nb");
    buf.move_right();
    buf.move_right();
    assert_eq!((buf.row, buf.col), (1, 0));
    buf.move_left();
    assert_eq!((buf.row, buf.col), (0, 1));
}
