//! Seesaw entry point
//!
//! On the web this wires the page and listens for clicks. Natively it runs a
//! short headless demo.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::MouseEvent;

    use seesaw::Tuning;
    use seesaw::platform::{self, dom::DomRefs};
    use seesaw::sim::{PlankClick, Seesaw};
    use seesaw::view::Frame;

    /// Page instance holding all state
    struct App {
        seesaw: Seesaw,
        dom: DomRefs,
    }

    impl App {
        fn render(&self) {
            self.dom.apply(&Frame::build(&self.seesaw));
        }

        fn on_plank_click(&mut self, event: &MouseEvent) {
            let Some(plank) = &self.dom.plank else {
                return;
            };
            let rect = plank.get_bounding_client_rect();
            let click = PlankClick::new(
                Vec2::new(event.client_x() as f32, event.client_y() as f32),
                Vec2::new(rect.left() as f32, rect.top() as f32),
                rect.width() as f32,
            );
            self.seesaw.drop_at(&click);
            self.render();
        }

        fn on_reset(&mut self) {
            self.seesaw.reset();
            self.render();
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Seesaw starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document available, not starting");
            return;
        };

        let app = Rc::new(RefCell::new(App {
            seesaw: Seesaw::new(Tuning::default(), platform::seed()),
            dom: DomRefs::lookup(&document),
        }));
        app.borrow().render();

        setup_plank_click(app.clone());
        setup_reset_button(app);

        log::info!("Seesaw running!");
    }

    fn setup_plank_click(app: Rc<RefCell<App>>) {
        let Some(plank) = app.borrow().dom.plank.clone() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            app.borrow_mut().on_plank_click(&event);
        });
        if let Err(e) =
            plank.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        {
            log::error!("Could not listen for plank clicks: {:?}", e);
        }
        closure.forget();
    }

    fn setup_reset_button(app: Rc<RefCell<App>>) {
        let Some(btn) = app.borrow().dom.reset_button.clone() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            app.borrow_mut().on_reset();
        });
        if let Err(e) = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        {
            log::error!("Could not listen for reset: {:?}", e);
        }
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use seesaw::Tuning;

    env_logger::init();
    log::info!("Seesaw (native) starting...");

    // Optional tuning file as the first argument
    let tuning = match std::env::args().nth(1) {
        Some(path) => match Tuning::from_file(&path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::error!("{}; using default tuning", e);
                Tuning::default()
            }
        },
        None => Tuning::default(),
    };

    run_demo(tuning, seesaw::platform::seed());
}

/// Drop a fixed set of clicks on a plank rendered at its nominal width
#[cfg(not(target_arch = "wasm32"))]
fn run_demo(tuning: seesaw::Tuning, seed: u64) {
    use glam::Vec2;
    use seesaw::sim::{PlankClick, Seesaw};
    use seesaw::view::Frame;

    let mut seesaw = Seesaw::new(tuning, seed);
    let width = seesaw.tuning().plank_length_px;

    println!("\nDropping objects (seed {})...", seesaw.seed());
    for fraction in [0.1, 0.85, 0.4, 0.95, 0.25, 0.6] {
        let click = PlankClick::new(Vec2::new(width * fraction, 0.0), Vec2::ZERO, width);
        let event = seesaw.drop_at(&click);
        println!(
            "  {:>2}kg at {:>7.1}px -> tilt {:>6.1}°",
            event.object.weight_kg, event.object.x_from_center_px, event.angle_deg
        );
    }

    let frame = Frame::build(&seesaw);
    println!(
        "\nLeft {} | Right {} | Tilt {} | Next {}",
        frame.stats.left_text(),
        frame.stats.right_text(),
        frame.stats.tilt_text(),
        frame.stats.next_weight_text()
    );
    println!("Plank transform: {}", frame.plank_transform());
    println!("\nHistory:");
    for line in &frame.history {
        println!("  {}", line);
    }

    seesaw.reset();
    println!(
        "\nAfter reset: {} objects, tilt {}°",
        seesaw.objects().len(),
        seesaw.angle_deg()
    );
}
