use chrono::Datelike;
use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::controls::{CtaButton, FeatureCard, NavItem};
use crate::components::form_modal::FormModal;
use crate::components::icons::{Icon, IconKind};
use crate::config;
use crate::state::{MenuState, ModalState, ModalVariant};

const NAV_ITEMS: [&str; 5] = ["Home", "Features", "Pricing", "About", "Contact"];

const FOOTER_COLUMNS: [(&str, [&str; 4]); 3] = [
    ("Product", ["Features", "Pricing", "Use Cases", "Integrations"]),
    ("Resources", ["Documentation", "API Reference", "Blog", "Support"]),
    ("Company", ["About Us", "Careers", "Privacy Policy", "Terms of Service"]),
];

fn nav_items() -> Html {
    NAV_ITEMS
        .iter()
        .map(|label| html! { <NavItem label={*label} /> })
        .collect::<Html>()
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let menu = use_state(MenuState::default);
    let modal = use_state(ModalState::default);

    let open_modal = {
        let modal = modal.clone();
        Callback::from(move |variant: ModalVariant| {
            info!("Opening form modal: {:?}", variant);
            modal.set((*modal).opened(variant));
        })
    };

    let close_modal = {
        let modal = modal.clone();
        Callback::from(move |_| {
            info!("Closing form modal");
            modal.set((*modal).closed());
        })
    };

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set((*menu).toggled());
        })
    };

    let get_started = open_modal.reform(|_| ModalVariant::GetStarted);
    let talk_to_us = open_modal.reform(|_| ModalVariant::Contact);

    let year = chrono::Local::now().year();

    html! {
        <div class="landing-page">
            <header class="container site-header">
                <nav class="site-nav">
                    <div class="brand">{"DataStream"}</div>
                    <div class="nav-links desktop-only">
                        { nav_items() }
                    </div>
                    <div class="desktop-only">
                        <CtaButton primary={true} onclick={get_started.clone()}>{"Get Started"}</CtaButton>
                    </div>
                    <button class="menu-button" aria-label="Toggle menu" onclick={toggle_menu}>
                        if menu.is_open {
                            <Icon kind={IconKind::Close} />
                        } else {
                            <Icon kind={IconKind::Menu} />
                        }
                    </button>
                </nav>
            </header>

            if menu.is_open {
                <div class="mobile-menu">
                    <div class="container mobile-menu-items">
                        { nav_items() }
                        <CtaButton primary={true} onclick={get_started.clone()}>{"Get Started"}</CtaButton>
                    </div>
                </div>
            }

            <main>
                <section class="container hero">
                    <h1>
                        {"Turn Your Video Data"}<br />
                        <span class="text-gradient">{"Into Revenue"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Unlock an effortless new revenue stream from your video library by sharing it to train the next generation of AI"}
                    </p>
                    <div class="hero-cta-group">
                        <CtaButton primary={true} onclick={get_started.clone()}>{"Get Started"}</CtaButton>
                        <CtaButton onclick={talk_to_us}>
                            <span class="cta-with-icon">
                                {"Talk to Us"}
                                <Icon kind={IconKind::MessageSquare} size={16} class={classes!("cta-icon")} />
                            </span>
                        </CtaButton>
                    </div>
                </section>

                <section class="container features">
                    <h2>{"Why License Your Video Data"}</h2>
                    <div class="feature-grid">
                        <FeatureCard
                            icon={IconKind::Database}
                            title="Effortless Revenue"
                            description="Simply sign up, upload your content, and start earning. We'll handle the rest"
                        />
                        <FeatureCard
                            icon={IconKind::Lock}
                            title="Unlock the Value"
                            description="Your library has more potential than you think. Tech companies worldwide need high-quality video data."
                        />
                        <FeatureCard
                            icon={IconKind::Handshake}
                            title="Seamless Licensing"
                            description="No hassle for you. Our team ensures your content meets tech specs, and prepares it for training"
                        />
                    </div>
                </section>

                <section class="value-section">
                    <div class="container value-content">
                        <div class="value-text">
                            <h2>{"What Makes Your Content Valuable"}</h2>
                            <p>
                                {"Your video library holds more than just great visuals—it's a treasure trove of valuable data that tech companies rely on to train their AI models. High-quality content is the foundation of smarter technology. Whether it's breathtaking aerial shots, in-depth tutorials, or captivating wildlife footage, your content offers unique angles that are hard to find elsewhere."}
                            </p>
                        </div>
                        <div class="value-image">
                            <img src={config::VALUE_IMAGE_URL} loading="lazy" alt="Integration" />
                        </div>
                    </div>
                </section>

                <section class="earning-section">
                    <div class="earning-pattern"></div>
                    <div class="container earning-content">
                        <h2>{"Start Earning Revenue From Your Video Data"}</h2>
                        <p>
                            {"By licensing your video data, you can start generating revenue effortlessly, without changing how you create or distribute. Let us handle the details, while you enjoy a new, passive income stream from your existing video library."}
                        </p>
                        <CtaButton primary={true} onclick={get_started}>{"Get Started"}</CtaButton>
                    </div>
                </section>
            </main>

            <footer class="site-footer">
                <div class="container">
                    <div class="footer-grid">
                        <div>
                            <h3>{"DataStream"}</h3>
                            <p class="muted">{"Empowering AI through advanced video data solutions."}</p>
                        </div>
                        {
                            FOOTER_COLUMNS.iter().map(|(heading, links)| html! {
                                <div>
                                    <h4>{ *heading }</h4>
                                    <ul class="footer-links">
                                        { for links.iter().map(|link| html! { <li><a href="#">{ *link }</a></li> }) }
                                    </ul>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                    <div class="footer-bottom">
                        { format!("© {} DataStream. All rights reserved.", year) }
                    </div>
                </div>
            </footer>

            <FormModal
                is_open={modal.is_open}
                variant={modal.variant}
                on_close={close_modal}
            />

            <style>
                {r#"
                    body {
                        margin: 0;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .landing-page {
                        min-height: 100vh;
                        background: linear-gradient(to bottom right, #1e3a8a, #1e40af);
                        color: #fff;
                    }
                    .container {
                        max-width: 1280px;
                        margin: 0 auto;
                        padding-left: 1.5rem;
                        padding-right: 1.5rem;
                    }
                    .site-header {
                        padding-top: 1rem;
                        padding-bottom: 1rem;
                    }
                    .site-nav {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .brand {
                        font-size: 1.5rem;
                        font-weight: 700;
                    }
                    .nav-links {
                        display: flex;
                        gap: 1.5rem;
                    }
                    .nav-item {
                        color: #d1d5db;
                        text-decoration: none;
                        transition: color 0.3s;
                    }
                    .nav-item:hover {
                        color: #fff;
                    }
                    .menu-button {
                        display: none;
                        background: none;
                        border: none;
                        color: #d1d5db;
                        cursor: pointer;
                    }
                    .menu-button:hover {
                        color: #fff;
                    }
                    .mobile-menu {
                        background: #1e40af;
                        padding: 1rem 0;
                    }
                    .mobile-menu-items {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .cta-button {
                        padding: 0.75rem 1.5rem;
                        border: none;
                        border-radius: 9999px;
                        font-size: 1.125rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: background 0.3s;
                    }
                    .cta-button.primary {
                        background: #eab308;
                        color: #1e3a8a;
                    }
                    .cta-button.primary:hover {
                        background: #facc15;
                    }
                    .cta-button.secondary {
                        background: #1d4ed8;
                        color: #fff;
                    }
                    .cta-button.secondary:hover {
                        background: #2563eb;
                    }
                    .cta-with-icon {
                        display: flex;
                        align-items: center;
                    }
                    .cta-icon {
                        margin-left: 0.5rem;
                    }
                    .hero {
                        padding-top: 3rem;
                        padding-bottom: 3rem;
                        text-align: center;
                    }
                    .hero h1 {
                        font-size: 3.75rem;
                        font-weight: 700;
                        line-height: 1.15;
                        margin-bottom: 1.5rem;
                    }
                    .text-gradient {
                        background: linear-gradient(to right, #facc15, #f59e0b);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .hero-subtitle {
                        font-size: 1.25rem;
                        color: #d1d5db;
                        max-width: 48rem;
                        margin: 0 auto 2rem auto;
                    }
                    .hero-cta-group {
                        display: flex;
                        justify-content: center;
                        gap: 1.5rem;
                    }
                    .features {
                        padding-top: 2.5rem;
                        padding-bottom: 2.5rem;
                    }
                    .features h2 {
                        font-size: 1.875rem;
                        text-align: center;
                        margin-bottom: 2rem;
                    }
                    .feature-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .feature-card {
                        background: rgba(30, 64, 175, 0.5);
                        padding: 1.5rem;
                        border-radius: 0.75rem;
                        border: 1px solid rgba(29, 78, 216, 0.3);
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.3);
                        transition: all 0.3s;
                    }
                    .feature-card:hover {
                        transform: translateY(-0.25rem);
                        background: rgba(30, 64, 175, 0.7);
                        border-color: rgba(29, 78, 216, 0.5);
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
                    }
                    .feature-icon {
                        color: #eab308;
                        margin-bottom: 1rem;
                    }
                    .feature-card h3 {
                        font-size: 1.25rem;
                        font-weight: 600;
                        margin-bottom: 0.5rem;
                    }
                    .feature-card p,
                    .value-text p,
                    .earning-content p {
                        color: #d1d5db;
                    }
                    .value-section {
                        background: #1e40af;
                        padding: 5rem 0;
                    }
                    .value-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 4rem;
                    }
                    .value-text,
                    .value-image {
                        flex: 1;
                    }
                    .value-text p {
                        font-size: 1.25rem;
                    }
                    .value-image img {
                        width: 100%;
                        border-radius: 0.5rem;
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.4);
                    }
                    .earning-section {
                        position: relative;
                        overflow: hidden;
                        background: #1e1b4b;
                        padding: 5rem 0;
                    }
                    .earning-pattern {
                        position: absolute;
                        inset: 0;
                        opacity: 0.1;
                        background-image: radial-gradient(circle, rgba(255, 255, 255, 0.5) 1px, transparent 1px);
                        background-size: 60px 60px;
                    }
                    .earning-content {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                    }
                    .earning-content p {
                        font-size: 1.25rem;
                        max-width: 42rem;
                        margin: 0 auto 3rem auto;
                    }
                    .site-footer {
                        background: #1e3a8a;
                        padding: 3rem 0;
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                    }
                    .footer-links {
                        list-style: none;
                        padding: 0;
                    }
                    .footer-links li {
                        margin-bottom: 0.5rem;
                    }
                    .footer-links a,
                    .muted {
                        color: #9ca3af;
                        text-decoration: none;
                    }
                    .footer-links a:hover {
                        color: #fff;
                    }
                    .footer-bottom {
                        margin-top: 2rem;
                        padding-top: 2rem;
                        border-top: 1px solid #1e40af;
                        text-align: center;
                        color: #9ca3af;
                    }
                    @media (max-width: 1024px) {
                        .feature-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    @media (max-width: 768px) {
                        .desktop-only {
                            display: none !important;
                        }
                        .menu-button {
                            display: block;
                        }
                        .hero h1 {
                            font-size: 3rem;
                        }
                        .hero-cta-group,
                        .value-content {
                            flex-direction: column;
                        }
                        .hero-cta-group {
                            align-items: center;
                            gap: 1rem;
                        }
                        .feature-grid,
                        .footer-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
