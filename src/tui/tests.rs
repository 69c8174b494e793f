// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Parentela-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Parentela and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crossterm::event::KeyModifiers;

use super::*;

fn key(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_line(app: &mut App, text: &str) {
    for ch in text.chars() {
        key(app, KeyCode::Char(ch));
    }
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn screen_cell_over(app: &App, person_id: PersonId) -> (u16, u16) {
    let center = app
        .workspace
        .scene()
        .node(person_id)
        .expect("node")
        .rect
        .center();
    let screen = app.workspace.transform().to_screen(center);
    (screen.x.round() as u16, screen.y.round() as u16)
}

#[test]
fn q_quits() {
    let mut app = App::new(Workspace::new(), None);
    assert!(!app.should_quit);
    key(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn add_prompt_creates_a_person() {
    let mut app = App::new(Workspace::new(), None);
    key(&mut app, KeyCode::Char('a'));
    assert!(app.prompt.is_some());
    type_line(&mut app, "Anna; gender=F");
    key(&mut app, KeyCode::Enter);

    assert!(app.prompt.is_none());
    assert_eq!(app.workspace.tree().len(), 1);
    let person = app.workspace.tree().person(PersonId::new(1)).expect("added");
    assert_eq!(person.name(), "Anna");
    assert_eq!(person.gender(), Gender::Female);
}

#[test]
fn prompt_escape_cancels_without_mutation() {
    let mut app = App::new(Workspace::new(), None);
    key(&mut app, KeyCode::Char('a'));
    type_line(&mut app, "Ghost");
    key(&mut app, KeyCode::Esc);
    assert!(app.prompt.is_none());
    assert!(app.workspace.tree().is_empty());
}

#[test]
fn prompt_backspace_edits_input() {
    let mut app = App::new(Workspace::new(), None);
    key(&mut app, KeyCode::Char('a'));
    type_line(&mut app, "Abx");
    key(&mut app, KeyCode::Backspace);
    assert_eq!(app.prompt.as_ref().expect("prompt").input, "Ab");
}

#[test]
fn failed_add_reports_a_toast_and_keeps_tree() {
    let mut app = App::new(Workspace::new(), None);
    key(&mut app, KeyCode::Char('a'));
    type_line(&mut app, "Kid; parents=99");
    key(&mut app, KeyCode::Enter);
    assert!(app.workspace.tree().is_empty());
    assert!(app.toast.is_some());
}

#[test]
fn marry_prompt_links_spouses() {
    let mut app = App::new(Workspace::demo(), None);
    // the demo grandparents start out married
    key(&mut app, KeyCode::Char('u'));
    type_line(&mut app, "1 2");
    key(&mut app, KeyCode::Enter);
    assert!(app
        .workspace
        .tree()
        .partners_of(PersonId::new(1))
        .is_empty());

    key(&mut app, KeyCode::Char('m'));
    type_line(&mut app, "1,2");
    key(&mut app, KeyCode::Enter);
    assert_eq!(
        app.workspace.tree().partners_of(PersonId::new(1)),
        vec![PersonId::new(2)]
    );
}

#[test]
fn click_selects_and_drag_moves_the_card() {
    let mut app = App::new(Workspace::demo(), None);
    let target = app.workspace.tree().order()[0];
    let (col, row) = screen_cell_over(&app, target);

    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), col, row));
    assert_eq!(app.selected, Some(target));

    app.handle_mouse(mouse(
        MouseEventKind::Drag(MouseButton::Left),
        col + 6,
        row + 2,
    ));
    app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), col + 6, row + 2));

    let offset = app.workspace.offsets().get(target);
    assert_eq!((offset.dx, offset.dy), (6.0, 2.0));
    assert!(app.pointer.is_idle());
}

#[test]
fn background_drag_pans_instead_of_dragging() {
    let mut app = App::new(Workspace::demo(), None);
    let before = *app.workspace.transform();

    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 79, 23));
    app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 70, 20));
    app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 70, 20));

    assert!(app.selected.is_none());
    assert!(app.workspace.offsets().is_empty());
    let after = app.workspace.transform();
    assert_eq!((after.x, after.y), (before.x - 9.0, before.y - 3.0));
}

#[test]
fn scroll_zooms_around_the_cursor() {
    let mut app = App::new(Workspace::demo(), None);
    app.handle_mouse(mouse(MouseEventKind::ScrollUp, 10, 5));
    assert!(app.workspace.transform().k > 1.0);
    app.handle_mouse(mouse(MouseEventKind::ScrollDown, 10, 5));
    let k = app.workspace.transform().k;
    assert!((k - 1.0).abs() < 1e-9);
}

#[test]
fn mouse_outside_the_diagram_does_not_start_a_gesture() {
    let mut app = App::new(Workspace::demo(), None);
    app.diagram_area = UiRect::new(1, 1, 40, 20);
    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 60, 30));
    assert!(app.pointer.is_idle());
}

#[test]
fn delete_removes_the_selected_person() {
    let mut app = App::new(Workspace::demo(), None);
    let target = app.workspace.tree().order()[0];
    app.selected = Some(target);
    let before = app.workspace.tree().len();

    key(&mut app, KeyCode::Char('x'));

    assert_eq!(app.workspace.tree().len(), before - 1);
    assert!(!app.workspace.tree().contains(target));
    assert!(app.selected.is_none());
}

#[test]
fn delete_without_selection_only_toasts() {
    let mut app = App::new(Workspace::demo(), None);
    let before = app.workspace.tree().len();
    key(&mut app, KeyCode::Char('x'));
    assert_eq!(app.workspace.tree().len(), before);
    assert!(app.toast.is_some());
}

#[test]
fn rename_updates_the_selected_person() {
    let mut app = App::new(Workspace::demo(), None);
    let target = app.workspace.tree().order()[0];
    app.selected = Some(target);
    key(&mut app, KeyCode::Char('r'));
    type_line(&mut app, "Nonno");
    key(&mut app, KeyCode::Enter);
    assert_eq!(
        app.workspace.tree().person(target).expect("person").name(),
        "Nonno"
    );
}

#[test]
fn zoom_keys_change_scale_and_reset_restores() {
    let mut app = App::new(Workspace::demo(), None);
    key(&mut app, KeyCode::Char('+'));
    assert!(app.workspace.transform().k > 1.0);
    key(&mut app, KeyCode::Char('0'));
    assert_eq!(app.workspace.transform().k, 1.0);
}

#[test]
fn print_key_queues_an_external_action() {
    let mut app = App::new(Workspace::demo(), None);
    key(&mut app, KeyCode::Char('p'));
    assert_eq!(app.take_external_action(), Some(ExternalAction::PrintDiagram));
    assert_eq!(app.take_external_action(), None);
}

#[test]
fn parse_add_command_accepts_every_field() {
    let command = parse_add_command(" Marco ; gender=M; parents=1, 2; spouse=4; photo=a.png")
        .expect("parses");
    assert_eq!(command.name, "Marco");
    assert_eq!(command.gender, Gender::Male);
    assert_eq!(command.parents, vec![PersonId::new(1), PersonId::new(2)]);
    assert_eq!(command.spouse, Some(PersonId::new(4)));
    assert_eq!(command.photo_path.as_deref(), Some("a.png"));
}

#[test]
fn parse_add_command_name_only() {
    let command = parse_add_command("Anna").expect("parses");
    assert_eq!(command.name, "Anna");
    assert_eq!(command.gender, Gender::Unspecified);
    assert!(command.parents.is_empty());
    assert!(command.spouse.is_none());
    assert!(command.photo_path.is_none());
}

#[test]
fn parse_add_command_rejects_garbage() {
    assert!(parse_add_command("").is_err());
    assert!(parse_add_command("   ").is_err());
    assert!(parse_add_command("A; parents=x").is_err());
    assert!(parse_add_command("A; parents=1,2,3").is_err());
    assert!(parse_add_command("A; hat=top").is_err());
    assert!(parse_add_command("A; spouse=").is_err());
}

#[test]
fn parse_id_pair_variants() {
    assert_eq!(
        parse_id_pair("1 2").expect("pair"),
        (PersonId::new(1), PersonId::new(2))
    );
    assert_eq!(
        parse_id_pair(" 3,4 ").expect("pair"),
        (PersonId::new(3), PersonId::new(4))
    );
    assert!(parse_id_pair("1").is_err());
    assert!(parse_id_pair("1 2 3").is_err());
    assert!(parse_id_pair("a b").is_err());
}
