use super::*;

fn items(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("item{}", i)).collect()
}

#[test]
fn selection_survives_refresh_when_still_in_range() {
    let mut list = SelectList::default();
    list.set_items(items(5));
    list.select(3);

    list.set_items(items(4));
    assert_eq!(list.selected, 3);
    list.set_items(items(10));
    assert_eq!(list.selected, 3);
}

#[test]
fn selection_resets_to_first_row_when_out_of_range() {
    let mut list = SelectList::default();
    list.set_items(items(5));
    list.select(4);

    list.set_items(items(4));
    assert_eq!(list.selected, 0);

    list.select(2);
    list.set_items(Vec::new());
    assert_eq!(list.selected, 0);
    assert_eq!(list.selected_item(), None);
}

#[test]
fn movement_stays_inside_the_list() {
    let mut list = SelectList::default();
    list.move_down();
    assert_eq!(list.selected, 0);

    list.set_items(items(2));
    list.move_down();
    list.move_down();
    assert_eq!(list.selected_item(), Some("item1"));
    list.move_up();
    list.move_up();
    assert_eq!(list.selected, 0);

    list.select(7);
    assert_eq!(list.selected, 0);
}

#[test]
fn pushed_item_becomes_selected() {
    let mut list = SelectList::default();
    list.set_items(items(2));
    list.push("new.txt".to_string());
    assert_eq!(list.selected_item(), Some("new.txt"));
}

#[test]
fn panel_update_replaces_title_and_lines() {
    let mut panel = InfoPanel::new("Info");
    panel.apply(PanelUpdate {
        title: "Push Output".to_string(),
        text: "a\nb".to_string(),
    });
    assert_eq!(panel.title, "Push Output");
    assert_eq!(panel.lines, vec!["a", "b"]);
    assert!(panel.updated_at.is_some());

    panel.scroll_down();
    panel.scroll_down();
    assert_eq!(panel.scroll, 1);

    panel.clear();
    assert_eq!(panel.title, "Info");
    assert!(panel.lines.is_empty());
    assert_eq!(panel.scroll, 0);
}
