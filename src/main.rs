use macroquad::prelude::*;
use space_gen::{
    Editor, EditorConfig,
    ui::{self, PANEL_WIDTH, MIN_WINDOW_HEIGHT},
    rendering::{self, Surface},
    input::{self, PointerTracker},
    logging,
};

/// Board size never comes from the environment, so defaults give the window size
fn window_conf() -> Conf {
    let (board_w, board_h) = EditorConfig::default().board_pixels();
    Conf {
        window_title: "SpaceGen".to_owned(),
        window_width: (board_w + PANEL_WIDTH) as i32,
        window_height: board_h.max(MIN_WINDOW_HEIGHT) as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    logging::init();

    let config = EditorConfig::from_env();
    let cell_size = config.cell_size;
    let mut editor = match Editor::new(config) {
        Ok(editor) => editor,
        Err(err) => {
            log::error!("invalid configuration: {err}");
            return;
        }
    };
    log::info!("editor ready: {:?}", editor.config());

    let mut surface = Surface::new(editor.grid());
    let mut tracker = PointerTracker::default();

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons();

        let changes = input::process_input(&mut editor, &mut tracker, &buttons, mouse_pos);
        surface.apply(&changes);

        clear_background(DARKGRAY);
        surface.draw(cell_size);
        rendering::draw_panel(&editor, &buttons, mouse_pos);

        next_frame().await;
    }
}
