//! Landing page component
//!
//! The Replydesk marketing page, sections in this order:
//! - Navigation header with theme toggle
//! - Hero with the animated chat demo
//! - Features, Integrations, FAQ
//! - Pricing (plan buttons open the lead modal with the plan preselected)
//! - About and footer
//! - Lead capture modal and the floating support widget
//!
//! Every section below the hero fades in through `Reveal`.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};
use leptos_router::components::A;

use crate::core::lead::PricingPlan;
use crate::ui::chat_demo::ChatDemo;
use crate::ui::icon::{Icon, icons};
use crate::ui::lead_form::{LeadCaptureModal, LeadModalContext, use_lead_modal_context};
use crate::ui::support_widget::SupportWidget;
use crate::ui::theme::{ThemeContext, use_theme_context};
use crate::ui::visibility::Reveal;

const NAV_LINKS: [(&str, &str); 5] = [
    ("#features", "Features"),
    ("#integrations", "Integrations"),
    ("#faq", "FAQ"),
    ("#pricing", "Pricing"),
    ("#about", "About"),
];

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    let theme = use_theme_context();
    let leads = use_lead_modal_context();

    view! {
        <SeoMeta />
        <LandingStyles />

        <div class="min-h-screen bg-theme-primary overflow-x-hidden">
            <Header theme=theme leads=leads />

            // Hero Section
            <section id="hero" class="min-h-screen flex items-center pt-24 pb-16 px-4 relative">
                <div class="max-w-6xl mx-auto w-full grid lg:grid-cols-2 gap-12 items-center">
                    <div class="text-center lg:text-left">
                        <h1 class="text-5xl sm:text-6xl font-bold text-theme-primary mb-6 tracking-tight landing-fade-in-up">
                            "Support that feels like a conversation"
                        </h1>
                        <p class="text-xl text-theme-secondary mb-10 leading-relaxed landing-fade-in-up landing-delay-200">
                            "Replydesk puts live chat, email and social messages in one shared inbox, so your team answers faster and customers never repeat themselves."
                        </p>
                        <div class="flex flex-col sm:flex-row items-center lg:justify-start justify-center gap-4 landing-fade-in-up landing-delay-400">
                            <button
                                class="landing-btn-primary"
                                on:click=move |_| leads.open(None)
                            >
                                "Request a demo"
                            </button>
                            <a href="#pricing" class="landing-btn-secondary">
                                "See pricing"
                            </a>
                        </div>
                    </div>

                    <div class="landing-fade-in-up landing-delay-400">
                        <ChatDemo />
                    </div>
                </div>

                <div class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce" aria-hidden="true">
                    <Icon name=icons::CHEVRON_DOWN class="w-6 h-6" />
                </div>
            </section>

            // Features Section
            <section id="features" class="py-20 px-4 bg-theme-secondary/10">
                <div class="max-w-6xl mx-auto">
                    <Reveal class="text-center mb-16">
                        <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                            "Everything your support team needs"
                        </h2>
                        <p class="text-lg text-theme-secondary max-w-2xl mx-auto">
                            "From the first hello to the last follow-up, in one place."
                        </p>
                    </Reveal>

                    <div class="grid md:grid-cols-3 gap-8">
                        <FeatureCard
                            icon=icons::INBOX
                            title="Shared inbox"
                            description="Chat, email and social messages land in one queue with assignment and collision detection."
                        />
                        <FeatureCard
                            icon=icons::CHAT
                            title="Live chat widget"
                            description="A lightweight widget that loads in milliseconds and matches your brand."
                        />
                        <FeatureCard
                            icon=icons::LIGHTNING
                            title="Saved replies"
                            description="Answer common questions in one click and keep tone consistent across the team."
                        />
                    </div>
                </div>
            </section>

            <IntegrationsSection />
            <FaqSection />
            <PricingSection leads=leads />
            <AboutSection />
            <Footer />

            <LeadCaptureModal />
            <SupportWidget />
        </div>
    }
}

/// Header component with mobile menu support
#[component]
fn Header(theme: ThemeContext, leads: LeadModalContext) -> impl IntoView {
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    view! {
        <header class="fixed top-0 left-0 right-0 z-40 bg-theme-primary/80 backdrop-blur-md border-b border-theme/50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <A href="/" attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                        <Logo />
                        <span class="text-xl font-bold text-theme-primary">"Replydesk"</span>
                    </A>

                    // Desktop Navigation
                    <div class="hidden md:flex items-center gap-6">
                        <nav class="flex items-center gap-4">
                            {NAV_LINKS.iter().map(|(href, label)| view! {
                                <a href=*href class="text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors">
                                    {*label}
                                </a>
                            }).collect_view()}
                        </nav>
                        <button class="btn-primary" on:click=move |_| leads.open(None)>
                            "Get started"
                        </button>
                        <ThemeToggle theme=theme />
                    </div>

                    <button
                        class="md:hidden p-2 rounded-lg hover:bg-theme-secondary/30 transition-colors"
                        on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                        aria-label="Toggle mobile menu"
                        aria-expanded=move || mobile_menu_open.get().to_string()
                    >
                        {move || {
                            let name = if mobile_menu_open.get() { icons::X } else { icons::MENU };
                            view! { <Icon name=name class="w-6 h-6" /> }
                        }}
                    </button>
                </div>

                // Mobile menu
                <div
                    class="md:hidden overflow-hidden transition-all duration-300"
                    class:max-h-0=move || !mobile_menu_open.get()
                    class:max-h-96=move || mobile_menu_open.get()
                >
                    <nav class="py-4 flex flex-col gap-2 border-t border-theme/50">
                        {NAV_LINKS.iter().map(|(href, label)| view! {
                            <a
                                href=*href
                                class="block px-4 py-2 text-sm font-medium text-theme-secondary hover:text-theme-primary hover:bg-theme-secondary/30 rounded-lg transition-colors"
                                on:click=move |_| set_mobile_menu_open.set(false)
                            >
                                {*label}
                            </a>
                        }).collect_view()}
                        <ThemeToggle theme=theme />
                    </nav>
                </div>
            </div>
        </header>
    }
}

/// Theme toggle button component
#[component]
fn ThemeToggle(theme: ThemeContext) -> impl IntoView {
    view! {
        <button
            class="p-2 rounded-lg border border-theme hover:bg-theme-secondary/30 transition-colors"
            on:click=move |_| theme.toggle()
            aria-label="Toggle theme"
        >
            {move || {
                let name = if theme.current().is_dark() { icons::SUN } else { icons::MOON };
                view! { <Icon name=name class="w-5 h-5" /> }
            }}
        </button>
    }
}

/// Feature card component
#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <Reveal class="bg-theme-primary p-6 rounded-xl border border-theme hover:border-accent-primary/50 transition-all duration-300 hover:shadow-lg hover:-translate-y-1">
            <div class="w-12 h-12 rounded-lg bg-accent-primary/10 flex items-center justify-center mb-4">
                <Icon name=icon class="w-6 h-6" />
            </div>
            <h3 class="text-lg font-semibold text-theme-primary mb-2">{title}</h3>
            <p class="text-theme-secondary text-sm leading-relaxed">{description}</p>
        </Reveal>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Replydesk - Customer support chat for growing teams" />

        <Meta name="description" content="Replydesk brings live chat, email and social messages into one shared inbox. Answer faster, keep context, delight customers." />
        <Meta name="keywords" content="customer support, live chat, help desk, shared inbox, support software" />

        <Meta property="og:type" content="website" />
        <Meta property="og:url" content="https://replydesk.io/" />
        <Meta property="og:title" content="Replydesk - Customer support chat for growing teams" />
        <Meta property="og:description" content="Live chat, email and social messages in one shared inbox." />

        <Link rel="canonical" href="https://replydesk.io/" />
    }
}

/// Integrations grid
#[component]
fn IntegrationsSection() -> impl IntoView {
    const INTEGRATIONS: [&str; 8] = [
        "Slack", "Shopify", "Salesforce", "HubSpot", "Zapier", "Stripe", "WhatsApp", "Gmail",
    ];

    view! {
        <section id="integrations" class="py-20 px-4">
            <div class="max-w-5xl mx-auto">
                <Reveal class="text-center mb-12">
                    <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                        "Works with the tools you already use"
                    </h2>
                    <p class="text-lg text-theme-secondary max-w-2xl mx-auto">
                        "Connect your stack in minutes. Customer context follows every conversation."
                    </p>
                </Reveal>

                <Reveal class="grid grid-cols-2 sm:grid-cols-4 gap-4">
                    {INTEGRATIONS.iter().map(|name| view! {
                        <div class="flex items-center justify-center gap-2 p-4 rounded-xl border border-theme bg-theme-secondary/20">
                            <Icon name=icons::PLUG class="w-4 h-4" />
                            <span class="font-medium text-theme-primary">{*name}</span>
                        </div>
                    }).collect_view()}
                </Reveal>
            </div>
        </section>
    }
}

/// FAQ section component
#[component]
fn FaqSection() -> impl IntoView {
    view! {
        <section id="faq" class="py-20 px-4 bg-theme-secondary/10">
            <div class="max-w-3xl mx-auto">
                <Reveal class="text-center mb-16">
                    <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                        "Frequently Asked Questions"
                    </h2>
                </Reveal>

                <div class="space-y-4">
                    <FaqItem
                        question="How long does setup take?"
                        answer="Most teams are live the same day. Paste one script tag for the chat widget and forward your support address to Replydesk."
                    />
                    <FaqItem
                        question="Can I try Replydesk before paying?"
                        answer="Every plan starts with a 14-day free trial. No credit card required."
                    />
                    <FaqItem
                        question="Does the chat widget slow down my site?"
                        answer="No. The widget loads asynchronously after your page and weighs less than most images."
                    />
                    <FaqItem
                        question="Can I move my history from another help desk?"
                        answer="Yes. We import conversations and contacts from the major help desks at no extra cost on Growth and Enterprise."
                    />
                </div>
            </div>
        </section>
    }
}

/// FAQ accordion item component
#[component]
fn FaqItem(question: &'static str, answer: &'static str) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);

    view! {
        <Reveal class="border border-theme rounded-xl overflow-hidden">
            <button
                class="w-full px-6 py-4 flex items-center justify-between gap-4 text-left hover:bg-theme-secondary/30 transition-colors"
                on:click=move |_| set_is_open.update(|v| *v = !*v)
                aria-expanded=move || is_open.get().to_string()
            >
                <span class="font-semibold text-theme-primary">{question}</span>
                <div
                    class="flex items-center justify-center w-5 h-5 flex-shrink-0 transition-transform duration-300"
                    class=("rotate-180", move || is_open.get())
                >
                    <Icon name=icons::CHEVRON_DOWN class="w-5 h-5" />
                </div>
            </button>
            <div
                class="overflow-hidden transition-all duration-300"
                class:max-h-0=move || !is_open.get()
                class:max-h-96=move || is_open.get()
            >
                <div class="px-6 pb-4 text-theme-secondary leading-relaxed">
                    {answer}
                </div>
            </div>
        </Reveal>
    }
}

/// Pricing section component
#[component]
fn PricingSection(leads: LeadModalContext) -> impl IntoView {
    view! {
        <section id="pricing" class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <Reveal class="text-center mb-16">
                    <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                        "Simple, Transparent Pricing"
                    </h2>
                    <p class="text-lg text-theme-secondary max-w-2xl mx-auto">
                        "Pay per agent. Unlimited customers and conversations on every plan."
                    </p>
                </Reveal>

                <div class="grid md:grid-cols-3 gap-8 max-w-5xl mx-auto">
                    <PricingCard
                        plan=PricingPlan::Starter
                        price="$15"
                        period="/agent/month"
                        description="For small teams answering their first customers"
                        features=vec![
                            ("Shared inbox", true),
                            ("Live chat widget", true),
                            ("Saved replies", true),
                            ("Integrations", false),
                            ("Priority support", false),
                        ]
                        cta_text="Start free trial"
                        highlighted=false
                        leads=leads
                    />
                    <PricingCard
                        plan=PricingPlan::Growth
                        price="$39"
                        period="/agent/month"
                        description="For teams scaling support across channels"
                        features=vec![
                            ("Everything in Starter", true),
                            ("All integrations", true),
                            ("Reports and CSAT", true),
                            ("History import", true),
                            ("Priority support", false),
                        ]
                        cta_text="Start free trial"
                        highlighted=true
                        leads=leads
                    />
                    <PricingCard
                        plan=PricingPlan::Enterprise
                        price="Custom"
                        period=""
                        description="For organizations with advanced security needs"
                        features=vec![
                            ("Everything in Growth", true),
                            ("SSO and SAML", true),
                            ("Audit logs", true),
                            ("Dedicated success manager", true),
                            ("Priority support", true),
                        ]
                        cta_text="Contact sales"
                        highlighted=false
                        leads=leads
                    />
                </div>
            </div>
        </section>
    }
}

/// Pricing card component
#[component]
fn PricingCard(
    plan: PricingPlan,
    price: &'static str,
    period: &'static str,
    description: &'static str,
    features: Vec<(&'static str, bool)>,
    cta_text: &'static str,
    highlighted: bool,
    leads: LeadModalContext,
) -> impl IntoView {
    let card_class = if highlighted {
        "relative bg-theme-primary p-8 rounded-2xl border-2 border-accent-primary shadow-xl md:scale-105"
    } else {
        "bg-theme-primary p-8 rounded-2xl border border-theme hover:border-theme-secondary transition-colors"
    };

    view! {
        <Reveal class=card_class>
            {highlighted.then(|| view! {
                <div class="absolute -top-4 left-1/2 -translate-x-1/2 px-4 py-1 bg-accent-primary text-white text-sm font-medium rounded-full">
                    "Most Popular"
                </div>
            })}

            <div class="text-center mb-6">
                <h3 class="text-xl font-bold text-theme-primary mb-2">{plan.display_name()}</h3>
                <div class="flex items-baseline justify-center gap-1">
                    <span class="text-4xl font-bold text-theme-primary">{price}</span>
                    <span class="text-theme-secondary">{period}</span>
                </div>
                <p class="text-sm text-theme-secondary mt-2">{description}</p>
            </div>

            <ul class="space-y-3 mb-8">
                {features.into_iter().map(|(feature, included)| {
                    let icon = if included { icons::CHECK } else { icons::X };
                    view! {
                        <li class="flex items-center gap-3">
                            <Icon name=icon class="w-5 h-5 flex-shrink-0" />
                            <span class=if included { "text-theme-primary" } else { "text-theme-tertiary" }>
                                {feature}
                            </span>
                        </li>
                    }
                }).collect_view()}
            </ul>

            <button
                class=if highlighted { "btn-primary w-full" } else { "btn-secondary w-full" }
                on:click=move |_| leads.open(Some(plan))
            >
                {cta_text}
            </button>
        </Reveal>
    }
}

/// About section
#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="py-20 px-4 bg-theme-secondary/10">
            <Reveal class="max-w-3xl mx-auto text-center">
                <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-6">"About Replydesk"</h2>
                <p class="text-lg text-theme-secondary leading-relaxed mb-4">
                    "We started Replydesk after years of running support teams on tools built for ticket counts instead of people. Our goal is simple: every customer should feel heard, and every agent should have the context to help."
                </p>
                <p class="text-lg text-theme-secondary leading-relaxed">
                    "Today thousands of teams use Replydesk to answer millions of conversations every month."
                </p>
            </Reveal>
        </section>
    }
}

/// Logo component
#[component]
fn Logo() -> impl IntoView {
    view! {
        <div class="w-10 h-10 bg-accent-primary rounded-xl flex items-center justify-center shadow-lg">
            <Icon name=icons::CHAT class="w-6 h-6 invert" />
        </div>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 border-t border-theme bg-theme-primary">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8 mb-8">
                    <div class="md:col-span-2">
                        <div class="flex items-center gap-3 mb-4">
                            <Logo />
                            <span class="text-xl font-bold text-theme-primary">"Replydesk"</span>
                        </div>
                        <p class="text-sm text-theme-secondary max-w-md">
                            "Customer support chat for growing teams."
                        </p>
                    </div>

                    <div>
                        <h4 class="font-semibold text-theme-primary mb-4">"Product"</h4>
                        <ul class="space-y-2">
                            {NAV_LINKS[..4].iter().map(|(href, label)| view! {
                                <li>
                                    <a href=*href class="text-sm text-theme-secondary hover:text-accent-primary transition-colors">
                                        {*label}
                                    </a>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="font-semibold text-theme-primary mb-4">"Company"</h4>
                        <ul class="space-y-2">
                            <li>
                                <a href="#about" class="text-sm text-theme-secondary hover:text-accent-primary transition-colors">"About"</a>
                            </li>
                            <li>
                                <a href="mailto:hello@replydesk.io" class="text-sm text-theme-secondary hover:text-accent-primary transition-colors">"Contact"</a>
                            </li>
                        </ul>
                    </div>
                </div>

                <div class="pt-8 border-t border-theme/50 text-center sm:text-left">
                    <span class="text-sm text-theme-tertiary">"© 2026 Replydesk. All rights reserved."</span>
                </div>
            </div>
        </footer>
    }
}

/// CSS for the entrance, reveal and typing animations
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            .landing-btn-primary {
                padding: 1rem 2rem;
                font-weight: 600;
                font-size: 1.125rem;
                color: white;
                background-color: var(--accent-primary);
                border-radius: 0.75rem;
                transition: all 0.3s;
                box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                cursor: pointer;
            }
            .landing-btn-primary:hover {
                transform: scale(1.05);
                background-color: var(--accent-primary-hover);
            }

            .landing-btn-secondary {
                padding: 1rem 2rem;
                font-weight: 600;
                font-size: 1.125rem;
                border: 2px solid var(--border-color);
                border-radius: 0.75rem;
                transition: all 0.3s;
                color: var(--text-primary);
            }
            .landing-btn-secondary:hover {
                transform: scale(1.05);
            }

            @keyframes landing-fade-in-up {
                from { opacity: 0; transform: translateY(20px); }
                to { opacity: 1; transform: translateY(0); }
            }
            .landing-fade-in-up {
                animation: landing-fade-in-up 0.6s ease-out forwards;
            }
            .landing-delay-200 { animation-delay: 0.2s; opacity: 0; }
            .landing-delay-400 { animation-delay: 0.4s; opacity: 0; }

            /* Scroll reveal, toggled by the visibility trigger */
            .reveal {
                opacity: 0;
                transform: translateY(30px);
                transition: opacity 0.6s ease-out, transform 0.6s ease-out;
            }
            .reveal.visible {
                opacity: 1;
                transform: translateY(0);
            }

            /* Chat demo */
            @keyframes chat-bubble-in {
                from { opacity: 0; transform: translateY(8px) scale(0.98); }
                to { opacity: 1; transform: translateY(0) scale(1); }
            }
            .chat-bubble-in {
                animation: chat-bubble-in 0.3s ease-out;
            }

            @keyframes typing-bounce {
                0%, 80%, 100% { transform: translateY(0); opacity: 0.5; }
                40% { transform: translateY(-4px); opacity: 1; }
            }
            .typing-dot {
                width: 0.5rem;
                height: 0.5rem;
                border-radius: 9999px;
                background-color: currentColor;
                animation: typing-bounce 1.2s infinite ease-in-out;
            }
            .typing-dot-2 { animation-delay: 0.15s; }
            .typing-dot-3 { animation-delay: 0.3s; }

            @media (prefers-reduced-motion: reduce) {
                .reveal, .chat-bubble-in, .typing-dot, .landing-fade-in-up {
                    animation: none;
                    transition: none;
                    opacity: 1;
                    transform: none;
                }
            }
            "#
        </style>
    }
}
