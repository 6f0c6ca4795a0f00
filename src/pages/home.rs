use log::{info, warn};
use stylist::yew::Global;
use yew::prelude::*;

use crate::components::glass_button::GlassButton;
use crate::config;
use crate::effects::background;
use crate::effects::device;
use crate::effects::follower::LiquidGlass;
use crate::effects::parallax::Parallax;
use crate::effects::press::PressFeedback;
use crate::effects::reveal::Reveal;

const STYLE: &str = r#"
    body {
        margin: 0;
        min-height: 100vh;
        background-color: #0b0e14;
        background-size: cover;
        background-position: center;
        background-attachment: fixed;
        color: #fff;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .main-container {
        max-width: 680px;
        margin: 0 auto;
        padding: 4rem 1.5rem;
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 2.5rem;
    }
    .hero {
        text-align: center;
    }
    .hero h1 {
        font-size: 2.4rem;
        margin-bottom: 0.5rem;
    }
    .hero p {
        color: #bbb;
        font-size: 1.1rem;
        margin: 0;
    }
    .buttons-container {
        display: flex;
        flex-direction: column;
        gap: 1rem;
        width: 100%;
    }
    .glass-btn {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 0.75rem;
        padding: 1rem 1.5rem;
        border-radius: 16px;
        background: rgba(255, 255, 255, 0.08);
        border: 1px solid rgba(255, 255, 255, 0.15);
        backdrop-filter: blur(12px);
        color: #fff;
        text-decoration: none;
        font-size: 1.05rem;
        cursor: pointer;
        transition: transform 0.3s ease, background 0.3s ease;
        animation: glass-appear 0.7s ease-out both;
        animation-play-state: paused;
    }
    .glass-btn:hover {
        transform: translateY(-3px);
        background: rgba(255, 255, 255, 0.12);
    }
    .contacts-buttons {
        display: flex;
        gap: 1rem;
        justify-content: center;
        flex-wrap: wrap;
    }
    .contact-btn {
        width: 52px;
        height: 52px;
        display: flex;
        align-items: center;
        justify-content: center;
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.08);
        border: 1px solid rgba(255, 255, 255, 0.15);
        backdrop-filter: blur(12px);
        color: #fff;
        font-size: 1.2rem;
        text-decoration: none;
        cursor: pointer;
        transition: transform 0.3s ease, background 0.3s ease;
    }
    .contact-btn:hover {
        transform: translateY(-3px);
        background: rgba(255, 255, 255, 0.12);
    }
    .liquid-follower {
        position: fixed;
        left: 0;
        top: 0;
        width: 0;
        height: 0;
        opacity: 0;
        pointer-events: none;
        z-index: 1;
        background: rgba(255, 255, 255, 0.1);
        border: 1px solid rgba(255, 255, 255, 0.2);
        backdrop-filter: blur(6px);
        box-shadow: 0 8px 32px rgba(31, 38, 135, 0.2);
        transition: all 0.6s cubic-bezier(0.23, 1, 0.32, 1);
    }
    @keyframes glass-appear {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    @media (max-width: 600px) {
        .main-container {
            padding: 3rem 1rem;
        }
        .hero h1 {
            font-size: 2rem;
        }
    }
"#;

struct EffectHandles {
    _reveal: Option<Reveal>,
    _press: Option<PressFeedback>,
    _follower: Option<LiquidGlass>,
    _parallax: Option<Parallax>,
}

// Each effect stands alone; one failing to attach must not stop the rest.
fn init_effects() -> EffectHandles {
    device::apply_reduced_motion();
    device::apply_touch_adjustments();
    background::load_deferred();

    let reveal = Reveal::attach();
    if reveal.is_none() {
        warn!("reveal-on-scroll not attached");
    }
    let press = PressFeedback::attach();
    if press.is_none() {
        warn!("press feedback not attached");
    }
    let follower = LiquidGlass::attach();
    if follower.is_none() {
        warn!("liquid follower not attached");
    }
    let parallax = if config::parallax_enabled() {
        Parallax::attach()
    } else {
        None
    };

    info!("page effects ready");
    EffectHandles {
        _reveal: reveal,
        _press: press,
        _follower: follower,
        _parallax: parallax,
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                let handles = init_effects();
                move || drop(handles)
            },
            (),
        );
    }

    html! {
        <>
            <Global css={STYLE} />
            <div class="main-container">
                <header class="hero">
                    <h1>{"Hey, I'm Alex"}</h1>
                    <p>{"Developer & maker. Everything I do, in one place."}</p>
                </header>
                <section class="buttons-container">
                    <GlassButton label="Projects" href="https://github.com/alexdev" icon="fas fa-code" />
                    <GlassButton label="Blog" href="https://alexdev.me/blog" icon="fas fa-pen-nib" />
                    <GlassButton label="Photography" href="https://alexdev.me/photos" icon="fas fa-camera" />
                    <GlassButton label="Music" href="https://alexdev.me/music" icon="fas fa-music" />
                </section>
                <section class="contacts-buttons">
                    <GlassButton contact={true} href="https://t.me/alexdev" icon="fab fa-telegram" />
                    <GlassButton contact={true} href="https://github.com/alexdev" icon="fab fa-github" />
                    <GlassButton contact={true} href="mailto:hi@alexdev.me" icon="fas fa-envelope" />
                </section>
            </div>
        </>
    }
}
