use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::layout::{Badge, Container, Section, SectionHeading};
use crate::config;
use crate::navigation::Section as Anchor;
use crate::outbound::{redirect_to, Destination, Offer};

#[derive(Properties, PartialEq)]
struct DomainCardProps {
    title: AttrValue,
    description: AttrValue,
    #[prop_or_default]
    large: bool,
}

#[function_component(DomainCard)]
fn domain_card(props: &DomainCardProps) -> Html {
    html! {
        <div class={classes!("domain-card", props.large.then(|| "large"))}>
            <div class="domain-card-bar"></div>
            <h4>{ props.title.clone() }</h4>
            <p>{ props.description.clone() }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PlanCardProps {
    name: AttrValue,
    summary: AttrValue,
    price: AttrValue,
    licenses: AttrValue,
    installments: AttrValue,
    #[prop_or_default]
    devices: Option<AttrValue>,
    features: Vec<&'static str>,
    cta: AttrValue,
    offer: Offer,
    #[prop_or_default]
    featured: bool,
}

#[function_component(PlanCard)]
fn plan_card(props: &PlanCardProps) -> Html {
    let variant = if props.featured { ButtonVariant::Primary } else { ButtonVariant::Outline };
    html! {
        <div class={classes!("plan-card", props.featured.then(|| "featured"))}>
            <h3>{ props.name.clone() }</h3>
            <p class="plan-summary">{ props.summary.clone() }</p>
            <div class="plan-price">
                <span class="plan-amount">{ props.price.clone() }</span>
                <span class="plan-licenses">{ props.licenses.clone() }</span>
                <p class="plan-installments">{ props.installments.clone() }</p>
                {
                    if let Some(devices) = &props.devices {
                        html! { <p class="plan-devices">{ devices.clone() }</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <ul class="plan-features">
                { for props.features.iter().map(|feature| html! {
                    <li><span class="check">{"✔"}</span><span>{ *feature }</span></li>
                }) }
            </ul>
            <Button
                onclick={redirect_to(Destination::Checkout(props.offer))}
                variant={variant}
                class={classes!("btn-wide", props.featured.then(|| "btn-large"))}
            >
                { props.cta.clone() }
            </Button>
        </div>
    }
}

struct Testimonial {
    name: &'static str,
    role: &'static str,
    clinic: &'static str,
    image: &'static str,
    quote: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Carla Mendes",
        role: "Terapeuta Ocupacional",
        clinic: "Clínica Viver",
        image: "https://images.unsplash.com/photo-1580489944761-15a19d654956?q=80&w=200&h=200&auto=format&fit=crop",
        quote: "A organização dos domínios facilitou muito a minha triagem inicial. O relatório para a família é o diferencial que faltava.",
    },
    Testimonial {
        name: "Dr. Roberto Silva",
        role: "Diretor Clínico",
        clinic: "Instituto Neuro",
        image: "https://images.unsplash.com/photo-1560250097-0b93528c311a?q=80&w=200&h=200&auto=format&fit=crop",
        quote: "Implementamos em toda a nossa equipe de T.O. A padronização das informações elevou o nível da nossa discussão clínica.",
    },
    Testimonial {
        name: "Luciana Costa",
        role: "Terapeuta Ocupacional",
        clinic: "Espaço Crescer",
        image: "https://images.unsplash.com/photo-1594824476967-48c8b964273f?q=80&w=200&h=200&auto=format&fit=crop",
        quote: "O rastreio sensorial indireto via WhatsApp economiza um tempo precioso que agora dedico inteiramente à intervenção presencial.",
    },
];

const SOLUTION_POINTS: [&str; 4] = [
    "Identificação de riscos funcionais motores",
    "Organização de hipóteses clínicas com base em dados",
    "Estabelecimento de baseline funcional inicial",
    "Monitoramento evolutivo ao longo do acompanhamento",
];

const PLAN_FEATURES_COMMON: [&str; 3] = [
    "Aprendentes ilimitados",
    "Domínios motores completos",
    "Relatórios profissional e família",
];

fn plan_features(devices: &'static str) -> Vec<&'static str> {
    let mut features = PLAN_FEATURES_COMMON.to_vec();
    features.push(devices);
    features
}

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub on_scroll: Callback<Anchor>,
    pub on_open_video: Callback<()>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let open_video = {
        let on_open_video = props.on_open_video.clone();
        Callback::from(move |_: MouseEvent| on_open_video.emit(()))
    };
    let see_plans = {
        let on_scroll = props.on_scroll.clone();
        Callback::from(move |_: MouseEvent| on_scroll.emit(Anchor::Plans))
    };

    html! {
        <div class="home-page">
            <header class="hero">
                <div class="hero-glow hero-glow-blue"></div>
                <div class="hero-glow hero-glow-teal"></div>
                <Container class="hero-inner">
                    <Badge>{"Para Terapeutas Ocupacionais e Clínicas Multiprofissionais"}</Badge>
                    <h1>{"NeuroRastreio "}<span class="accent">{"Motor™"}</span></h1>
                    <h2>{"Rastreio funcional motor para apoio à decisão clínica, sem diagnóstico."}</h2>
                    <p class="hero-lead">
                        {"Avaliação funcional indireta de componentes motores associados ao desempenho ocupacional, com organização objetiva de informações e retorno automático no painel profissional."}
                    </p>
                    <div class="hero-cta-group">
                        <Button onclick={redirect_to(Destination::Checkout(Offer::Individual))} class="btn-large">
                            {"Ativar licença anual"}
                        </Button>
                        <Button onclick={open_video.clone()} variant={ButtonVariant::Outline} class="btn-large">
                            {"Veja a plataforma por dentro"}
                        </Button>
                    </div>
                    <p class="hero-note">
                        {"📋 Baseado em matrizes funcionais amplamente utilizadas na prática clínica internacional."}
                    </p>
                </Container>
            </header>

            <div class="audience-strip">
                <Container>
                    <h3>{"Uso profissional indicado para"}</h3>
                    <p class="audience-list">{"Terapeutas Ocupacionais · Clínicas multiprofissionais"}</p>
                    <div class="audience-disclaimer">
                        <span class="rule"></span>
                        {"Ferramenta de rastreio funcional indireto para apoio à decisão clínica, não diagnóstico"}
                        <span class="rule"></span>
                    </div>
                </Container>
            </div>

            <Section class="tinted">
                <Container class="two-column">
                    <div>
                        <h2 class="block-title">{"O contexto funcional motor"}</h2>
                        <p class="block-lead">
                            {"Na prática clínica, o maior risco não é errar o diagnóstico motor. É "}
                            <strong>{"intervir sem clareza funcional"}</strong>
                            {", baseando decisões apenas em observação subjetiva."}
                        </p>
                        <ul class="problem-list">
                            <li>
                                <span class="problem-icon">{"⏱"}</span>
                                <div>
                                    <h4>{"Intervenções motoras sem foco funcional claro"}</h4>
                                    <p>{"Direcionamento de terapia sem dados estruturados de base."}</p>
                                </div>
                            </li>
                            <li>
                                <span class="problem-icon">{"📈"}</span>
                                <div>
                                    <h4>{"Dificuldade em demonstrar evolução objetiva"}</h4>
                                    <p>{"Baseline subjetivo dificulta a visualização de progressos técnicos."}</p>
                                </div>
                            </li>
                            <li>
                                <span class="problem-icon">{"↔"}</span>
                                <div>
                                    <h4>{"Reavaliações sem baseline estruturado"}</h4>
                                    <p>{"Perda de parâmetros históricos comparáveis."}</p>
                                </div>
                            </li>
                        </ul>
                    </div>
                    <div class="solution-card">
                        <h3>{"A solução NeuroRastreio Motor™"}</h3>
                        <p>
                            {"Transforme observação clínica em "}
                            <strong>{"informação funcional organizada"}</strong>
                            {", com processamento automático e retorno direto no painel profissional."}
                        </p>
                        <ul>
                            { for SOLUTION_POINTS.iter().map(|item| html! {
                                <li><span class="check">{"✔"}</span><span>{ *item }</span></li>
                            }) }
                        </ul>
                        <p class="solution-quote">
                            {"\"Não é diagnóstico. É base funcional para decisão clínica qualificada.\""}
                        </p>
                    </div>
                </Container>
            </Section>

            <Section id={Anchor::Domains.id()}>
                <Container>
                    <SectionHeading
                        title="Domínios funcionais avaliados"
                        subtitle="Matriz de rastreio estruturada para mapear componentes motores essenciais ao desempenho ocupacional."
                    />
                    <div class="domain-grid primary">
                        <DomainCard
                            large={true}
                            title="Perfil Sensorial Funcional"
                            description="Organização sensorial e impacto funcional no desempenho ocupacional, observando como o processamento sensorial interfere nas atividades diárias."
                        />
                        <DomainCard
                            large={true}
                            title="Desenvolvimento Motor"
                            description="Marcos motores funcionais organizados por faixa etária, permitindo identificar desvios em relação ao desenvolvimento esperado."
                        />
                        <DomainCard
                            large={true}
                            title="Força Funcional"
                            description="Capacidade funcional relacionada à escrita, postura e manipulação, avaliando a sustentação e resistência necessária para tarefas escolares e domésticas."
                        />
                    </div>
                    <div class="domain-grid secondary">
                        <DomainCard
                            title="Função Manual"
                            description="Coordenação fina, precisão e fadiga funcional na execução de tarefas de preensão e manipulação de objetos."
                        />
                        <DomainCard
                            title="Autonomia (AVDs)"
                            description="Independência funcional em atividades da vida diária, como vestuário, alimentação e higiene pessoal."
                        />
                        <DomainCard
                            title="Dor & Impacto Funcional"
                            description="Interferência de desconfortos físicos na execução de atividades e disposição para exploração motora."
                        />
                        <DomainCard
                            title="Autopercepção Funcional"
                            description="Discrepância entre a percepção funcional do aprendente/família e o desempenho motor observado."
                        />
                    </div>
                    <div class="domain-callout">
                        <span class="domain-callout-icon">{"⚡"}</span>
                        <div>
                            <h4>{"Rastreio Funcional Indireto"}</h4>
                            <p>{"O NeuroRastreio Motor™ não substitui avaliação clínica completa."}</p>
                        </div>
                    </div>
                </Container>
            </Section>

            <Section id={Anchor::Solution.id()} class="workflow">
                <Container class="workflow-inner">
                    <div class="workflow-steps">
                        <h2 class="block-title">{"Aplicação Remota via WhatsApp"}</h2>
                        <p class="block-lead">
                            {"O consultório se estende para além do espaço físico. A família recebe e responde de forma intuitiva, gerando dados para sua análise."}
                        </p>
                        <ol>
                            <li>
                                <span class="step-number">{"1"}</span>
                                <div>
                                    <h4>{"Profissional gera o link"}</h4>
                                    <p>{"Criação de link único e seguro no sistema profissional."}</p>
                                </div>
                            </li>
                            <li>
                                <span class="step-number">{"2"}</span>
                                <div>
                                    <h4>{"Envio aos pais"}</h4>
                                    <p>{"Família recebe via WhatsApp e responde sem necessidade de login."}</p>
                                </div>
                            </li>
                            <li>
                                <span class="step-number">{"3"}</span>
                                <div>
                                    <h4>{"Resultado retorna automaticamente"}</h4>
                                    <p>{"Dados processados direto no seu painel para decisão técnica."}</p>
                                </div>
                            </li>
                        </ol>
                    </div>
                    <div class="workflow-card">
                        <h3>{"📱 Processo Digital Eficiente"}</h3>
                        <ul>
                            <li>{"🖱 Sem PDFs soltos"}</li>
                            <li>{"⏱ Sem planilhas manuais"}</li>
                            <li>{"📄 Sem retrabalho de digitação"}</li>
                        </ul>
                    </div>
                </Container>
            </Section>

            <Section>
                <Container class="two-column">
                    <div class="report-mock">
                        <div class="report-mock-title"></div>
                        <div class="report-mock-line"></div>
                        <div class="report-mock-line"></div>
                        <div class="report-mock-charts">
                            <div class="chart blue">{"📊"}</div>
                            <div class="chart teal">{"📈"}</div>
                        </div>
                        <div class="report-mock-tag">{"Indicadores de Desempenho Ocupacional"}</div>
                    </div>
                    <div>
                        <Badge>{"Automação Inteligente"}</Badge>
                        <h2 class="block-title">{"Uma aplicação gera dois relatórios."}</h2>
                        <p class="block-lead">
                            {"A partir de uma única aplicação, o NeuroRastreio Motor™ gera automaticamente duas versões de relatório, cada uma no nível correto de leitura."}
                        </p>
                        <ul class="report-list">
                            <li>
                                <strong>{"Relatório Profissional:"}</strong>
                                {" apoio à decisão clínica com indicadores de desempenho e riscos motores."}
                            </li>
                            <li>
                                <strong>{"Relatório para Família:"}</strong>
                                {" versão simplificada, clara e com linguagem acessível para os pais."}
                            </li>
                        </ul>
                    </div>
                </Container>
            </Section>

            <Section id={Anchor::Plans.id()}>
                <Container>
                    <SectionHeading
                        title="Opções de licenciamento profissional"
                        subtitle="Configurações estruturadas para diferentes demandas operacionais, garantindo acesso integral aos protocolos de rastreio funcional motor."
                    />
                    <div class="plan-grid">
                        <PlanCard
                            name="Plano Clínica"
                            summary="Configuração para clínicas com múltiplos profissionais."
                            price="R$ 497"
                            licenses="5 licenças anuais"
                            installments="Ou em 4x de R$ 135,28"
                            devices="5 dispositivos ativos"
                            features={plan_features("5 dispositivos ativos simultâneos")}
                            cta="Ativar Plano Clínica"
                            offer={Offer::Clinic}
                        />
                        <PlanCard
                            featured={true}
                            name="Uso Clínico Individual"
                            summary="Licença anual para uso clínico individual contínuo."
                            price="R$ 147"
                            licenses="Licença anual"
                            installments="Ou em 3x de R$ 53,17"
                            features={plan_features("1 dispositivo ativo por licença")}
                            cta="Ativar Plano Individual"
                            offer={Offer::Individual}
                        />
                        <PlanCard
                            name="Plano Escola"
                            summary="Gestão de rastreio para grandes equipes ou instituições."
                            price="R$ 997"
                            licenses="15 licenças anuais"
                            installments="Ou em 5x de R$ 220,75"
                            devices="15 dispositivos ativos"
                            features={plan_features("15 dispositivos ativos simultâneos")}
                            cta="Ativar Plano Escola"
                            offer={Offer::School}
                        />
                    </div>
                    <p class="plan-footnote">
                        {"Licenciamento estruturado para assegurar conformidade técnica e integridade operacional dos dados."}
                    </p>
                </Container>
            </Section>

            <Section>
                <Container>
                    <SectionHeading
                        title="Avaliação por clínicas parceiras"
                        subtitle="O NeuroRastreio Motor™ foi disponibilizado antecipadamente para validar a aplicação prática e a utilidade clínica em contexto real."
                    />
                    <div class="testimonial-grid">
                        { for TESTIMONIALS.iter().map(|t| html! {
                            <div class="testimonial">
                                <span class="testimonial-mark">{"❝"}</span>
                                <p class="testimonial-quote">{ format!("\"{}\"", t.quote) }</p>
                                <div class="testimonial-author">
                                    <img src={t.image} alt={t.name} loading="lazy" />
                                    <div>
                                        <h4>{ t.name }</h4>
                                        <p class="testimonial-role">{ t.role }</p>
                                        <p class="testimonial-clinic">{ t.clinic }</p>
                                    </div>
                                </div>
                            </div>
                        }) }
                    </div>
                </Container>
            </Section>

            <Section id={Anchor::Contact.id()} class="bordered">
                <Container>
                    <div class="cta-panel">
                        <h2>{"Decisão clínica começa com dados funcionais."}</h2>
                        <p>
                            {"O NeuroRastreio Motor™ organiza o ponto de partida funcional e orienta suas decisões terapêuticas com base em evidências."}
                        </p>
                        <div class="cta-actions">
                            <Button onclick={see_plans} variant={ButtonVariant::Secondary} class="btn-large">
                                {"Ver Planos Profissionais"}
                            </Button>
                            <Button onclick={open_video} class={classes!("btn-light", "btn-large")}>
                                {"Ver demonstração"}
                            </Button>
                            <Button onclick={redirect_to(Destination::WhatsApp)} class={classes!("btn-light", "btn-large")}>
                                {"💬 Falar com consultor"}
                            </Button>
                        </div>
                        <p class="cta-note">{"Reembolso disponível por 7 dias · Licenças anuais"}</p>
                    </div>
                </Container>
            </Section>

            <footer class="home-footer">
                <Container>
                    <div class="footer-grid">
                        <div>
                            <div class="footer-brand">{"✥ NEURORASTREIO MOTOR"}</div>
                            <p>{"Rastreio funcional motor. Apoio à decisão. Prática clínica."}</p>
                        </div>
                        <div>
                            <h4>{"Produto"}</h4>
                            <ul>
                                <li>{"Pronto para execução"}</li>
                                <li>{"Foco em Desempenho Ocupacional"}</li>
                                <li>{"Suporte Remoto"}</li>
                            </ul>
                        </div>
                        <div class="footer-ethics">
                            <h4>{"Segurança e Ética"}</h4>
                            <p>
                                {"🛡 O NeuroRastreio Motor™ é um instrumento de rastreio funcional indireto. Deve ser usado por profissional qualificado como apoio à investigação. Não realiza diagnóstico."}
                            </p>
                        </div>
                    </div>
                    <div class="footer-bottom">
                        <p>{"© NeuroRastreio Motor. Todos os direitos reservados."}</p>
                        <p>
                            {"Desenvolvido com rigor clínico pela "}
                            <a href={config::DEVELOPER_URL} target="_blank" rel="noopener noreferrer">{"Psiform"}</a>
                            {"."}
                        </p>
                    </div>
                </Container>
            </footer>

            <style>
                {r#"
                    .hero {
                        position: relative;
                        padding: 5rem 0 6rem;
                        overflow: hidden;
                        text-align: center;
                    }

                    @media (min-width: 768px) {
                        .hero { padding: 8rem 0; }
                    }

                    .hero-glow {
                        position: absolute;
                        width: 24rem;
                        height: 24rem;
                        border-radius: 9999px;
                        filter: blur(64px);
                        opacity: 0.5;
                    }

                    .hero-glow-blue { top: -5rem; right: -5rem; background: #eff6ff; }
                    .hero-glow-teal { bottom: -5rem; left: -5rem; background: #f0fdfa; }

                    .hero-inner {
                        position: relative;
                        max-width: 48rem;
                    }

                    .hero h1 {
                        margin-top: 1rem;
                        font-size: 2.5rem;
                        font-weight: 800;
                        letter-spacing: -0.02em;
                        line-height: 1.15;
                        margin-bottom: 1.5rem;
                    }

                    @media (min-width: 768px) {
                        .hero h1 { font-size: 3.75rem; }
                    }

                    .hero h2 {
                        font-size: 1.5rem;
                        color: #334155;
                        margin-bottom: 1.5rem;
                    }

                    .hero-lead {
                        font-size: 1.25rem;
                        color: #475569;
                        line-height: 1.6;
                        max-width: 42rem;
                        margin: 0 auto 2rem;
                    }

                    .hero-cta-group, .cta-actions {
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        align-items: center;
                        gap: 1rem;
                    }

                    @media (min-width: 640px) {
                        .hero-cta-group, .cta-actions { flex-direction: row; }
                    }

                    .hero-note {
                        margin-top: 1.5rem;
                        font-size: 0.875rem;
                        color: #64748b;
                    }

                    .audience-strip {
                        padding: 3rem 0;
                        border-top: 1px solid #f1f5f9;
                        border-bottom: 1px solid #f1f5f9;
                        text-align: center;
                    }

                    .audience-strip h3 {
                        font-size: 0.7rem;
                        font-weight: 700;
                        color: #94a3b8;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        margin-bottom: 1rem;
                    }

                    .audience-list {
                        font-size: 1.2rem;
                        color: #475569;
                        font-weight: 500;
                        margin-bottom: 1.25rem;
                    }

                    .audience-disclaimer {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.75rem;
                        font-size: 0.65rem;
                        font-weight: 700;
                        color: #94a3b8;
                        text-transform: uppercase;
                        letter-spacing: 0.15em;
                    }

                    .audience-disclaimer .rule {
                        width: 1.5rem;
                        height: 1px;
                        background: #e2e8f0;
                    }

                    .tinted { background: #f8fafc; }
                    .bordered { border-top: 1px solid #f1f5f9; }

                    .two-column {
                        display: grid;
                        gap: 3rem;
                        align-items: center;
                    }

                    @media (min-width: 768px) {
                        .two-column { grid-template-columns: 1fr 1fr; }
                    }

                    .block-title {
                        font-size: 1.875rem;
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                    }

                    .block-lead {
                        font-size: 1.125rem;
                        color: #475569;
                        margin-bottom: 1.5rem;
                    }

                    .problem-list li {
                        display: flex;
                        gap: 0.75rem;
                        margin-bottom: 1rem;
                    }

                    .problem-icon {
                        background: #fee2e2;
                        border-radius: 0.25rem;
                        padding: 0.25rem;
                        height: fit-content;
                    }

                    .problem-list h4 { font-weight: 500; }
                    .problem-list p { font-size: 0.875rem; color: #475569; }

                    .solution-card {
                        background: #fff;
                        padding: 2rem;
                        border-radius: 1rem;
                        border: 1px solid #e2e8f0;
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    }

                    .solution-card h3 {
                        font-size: 1.5rem;
                        color: #1e3a8a;
                        margin-bottom: 1rem;
                    }

                    .solution-card > p { color: #475569; margin-bottom: 1.5rem; }

                    .solution-card li, .plan-features li {
                        display: flex;
                        gap: 0.75rem;
                        margin-bottom: 0.75rem;
                        color: #334155;
                    }

                    .solution-quote {
                        margin-top: 2rem;
                        padding-top: 1.5rem;
                        border-top: 1px solid #f1f5f9;
                        font-size: 0.875rem;
                        color: #64748b;
                        font-style: italic;
                    }

                    .domain-grid {
                        display: grid;
                        gap: 1.5rem;
                        margin-bottom: 1.5rem;
                    }

                    @media (min-width: 640px) {
                        .domain-grid.secondary { grid-template-columns: repeat(2, 1fr); }
                    }

                    @media (min-width: 768px) {
                        .domain-grid.primary { grid-template-columns: repeat(3, 1fr); }
                    }

                    @media (min-width: 1024px) {
                        .domain-grid.secondary { grid-template-columns: repeat(4, 1fr); }
                    }

                    .domain-card {
                        background: #fff;
                        padding: 1.5rem;
                        border-radius: 0.75rem;
                        border: 1px solid #e2e8f0;
                        transition: box-shadow 0.2s ease;
                    }

                    .domain-card:hover { box-shadow: 0 4px 12px rgba(15, 23, 42, 0.08); }
                    .domain-card.large { padding: 2rem; }

                    .domain-card-bar {
                        height: 0.375rem;
                        width: 2.5rem;
                        background: #1e3a8a;
                        border-radius: 9999px;
                        margin-bottom: 1rem;
                    }

                    .domain-card h4 { margin-bottom: 0.5rem; }
                    .domain-card.large h4 { font-size: 1.25rem; }
                    .domain-card p { font-size: 0.875rem; color: #475569; line-height: 1.6; }

                    .domain-callout {
                        display: flex;
                        width: fit-content;
                        margin: 3rem auto 0;
                        gap: 0.75rem;
                        padding: 1rem;
                        background: #f8fafc;
                        border: 1px solid #e2e8f0;
                        border-radius: 0.5rem;
                        font-size: 0.875rem;
                    }

                    .domain-callout p { color: #475569; }

                    .workflow { background: #1e3a8a; color: #fff; }

                    .workflow-inner {
                        display: grid;
                        gap: 3rem;
                        align-items: center;
                    }

                    @media (min-width: 768px) {
                        .workflow-inner { grid-template-columns: 6fr 5fr; }
                    }

                    .workflow .block-lead { color: #dbeafe; }

                    .workflow-steps ol { list-style: none; padding: 0; margin: 0; }

                    .workflow-steps li {
                        display: flex;
                        gap: 1rem;
                        margin-bottom: 1.5rem;
                    }

                    .workflow-steps p { color: #bfdbfe; font-size: 0.875rem; }

                    .step-number {
                        flex-shrink: 0;
                        width: 2rem;
                        height: 2rem;
                        border-radius: 9999px;
                        background: #1d4ed8;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: 700;
                        font-size: 0.875rem;
                    }

                    .workflow-card {
                        background: #fff;
                        color: #0f172a;
                        padding: 2rem;
                        border-radius: 1rem;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    }

                    .workflow-card h3 { margin-bottom: 1.5rem; }

                    .workflow-card li {
                        padding: 0.75rem;
                        background: #f8fafc;
                        border-radius: 0.5rem;
                        font-weight: 500;
                        margin-bottom: 1rem;
                    }

                    .report-mock {
                        position: relative;
                        width: 100%;
                        max-width: 28rem;
                        aspect-ratio: 3 / 4;
                        margin: 0 auto;
                        background: #f1f5f9;
                        border: 2px solid #e2e8f0;
                        border-radius: 0.5rem;
                        padding: 1.5rem;
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                    }

                    .report-mock-title { width: 33%; height: 1rem; background: #cbd5e1; border-radius: 0.25rem; margin-bottom: 1rem; }
                    .report-mock-line { height: 0.5rem; background: #e2e8f0; border-radius: 0.25rem; margin-bottom: 0.5rem; }

                    .report-mock-charts {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                        margin: 1.5rem 0;
                    }

                    .chart {
                        height: 6rem;
                        border-radius: 0.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 2.5rem;
                    }

                    .chart.blue { background: #dbeafe; }
                    .chart.teal { background: #ccfbf1; }

                    .report-mock-tag {
                        padding: 1rem;
                        background: #f0fdf4;
                        border: 1px solid #dcfce7;
                        border-radius: 0.25rem;
                        font-size: 0.75rem;
                        color: #166534;
                    }

                    .report-list li { margin-bottom: 1rem; color: #334155; font-weight: 500; }

                    .plan-grid {
                        display: grid;
                        gap: 2rem;
                        align-items: start;
                    }

                    @media (min-width: 768px) {
                        .plan-grid { grid-template-columns: repeat(3, 1fr); }
                    }

                    .plan-card {
                        display: flex;
                        flex-direction: column;
                        height: 100%;
                        text-align: center;
                        background: #fff;
                        padding: 2rem;
                        border-radius: 1.5rem;
                        border: 1px solid #f1f5f9;
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    }

                    .plan-card.featured {
                        position: relative;
                        z-index: 1;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    }

                    @media (min-width: 768px) {
                        .plan-card.featured { transform: scale(1.05); padding: 2.5rem; }
                    }

                    .plan-card h3 { font-size: 1.25rem; margin-bottom: 0.5rem; }
                    .plan-card.featured h3 { font-size: 1.5rem; font-weight: 900; }
                    .plan-summary { color: #64748b; font-size: 0.875rem; margin-bottom: 1.5rem; }

                    .plan-price { margin-bottom: 1.5rem; display: flex; flex-direction: column; align-items: center; }
                    .plan-amount { font-size: 2.25rem; font-weight: 800; }
                    .plan-card.featured .plan-amount { font-size: 3rem; font-weight: 900; color: #1e3a8a; }
                    .plan-licenses { color: #64748b; font-size: 0.75rem; margin-top: 0.5rem; }
                    .plan-installments { color: #64748b; font-size: 0.75rem; margin-top: 0.25rem; }
                    .plan-devices { color: #94a3b8; font-size: 0.75rem; margin-top: 1rem; }

                    .plan-features {
                        text-align: left;
                        flex-grow: 1;
                        margin-bottom: 2rem;
                        font-size: 0.875rem;
                    }

                    .plan-footnote {
                        margin: 3rem auto 0;
                        max-width: 36rem;
                        text-align: center;
                        font-size: 0.75rem;
                        color: #94a3b8;
                    }

                    .testimonial-grid {
                        display: grid;
                        gap: 2rem;
                    }

                    @media (min-width: 768px) {
                        .testimonial-grid { grid-template-columns: repeat(3, 1fr); }
                    }

                    .testimonial {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        background: #f8fafc;
                        padding: 2rem;
                        border-radius: 1rem;
                    }

                    .testimonial-mark {
                        position: absolute;
                        top: 1.5rem;
                        right: 1.5rem;
                        font-size: 2rem;
                        color: #dbeafe;
                    }

                    .testimonial-quote {
                        flex-grow: 1;
                        font-style: italic;
                        color: #475569;
                        margin-bottom: 1.5rem;
                    }

                    .testimonial-author { display: flex; align-items: center; gap: 1rem; }

                    .testimonial-author img {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 9999px;
                        object-fit: cover;
                        border: 2px solid #fff;
                    }

                    .testimonial-author h4 { font-size: 0.875rem; }
                    .testimonial-role { font-size: 0.75rem; color: #2563eb; font-weight: 500; }
                    .testimonial-clinic { font-size: 0.75rem; color: #64748b; }

                    .cta-note { font-size: 0.875rem; color: rgba(255, 255, 255, 0.8); margin-top: 1.5rem; }

                    .home-footer {
                        background: #f8fafc;
                        padding: 4rem 0 2rem;
                        border-top: 1px solid #e2e8f0;
                        font-size: 0.875rem;
                    }

                    .footer-grid {
                        display: grid;
                        gap: 2rem;
                        margin-bottom: 3rem;
                        color: #64748b;
                    }

                    @media (min-width: 768px) {
                        .footer-grid { grid-template-columns: 1fr 1fr 2fr; }
                    }

                    .footer-brand { font-weight: 700; color: #334155; margin-bottom: 1rem; }
                    .footer-grid h4 { color: #0f172a; margin-bottom: 1rem; }
                    .footer-grid li { margin-bottom: 0.5rem; }

                    .footer-bottom {
                        padding-top: 2rem;
                        border-top: 1px solid #e2e8f0;
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                        justify-content: space-between;
                        align-items: center;
                        color: #94a3b8;
                    }

                    @media (min-width: 768px) {
                        .footer-bottom { flex-direction: row; }
                    }

                    .footer-bottom a {
                        color: inherit;
                        text-decoration: underline;
                        text-underline-offset: 4px;
                    }

                    .footer-bottom a:hover { color: #1e3a8a; }
                "#}
            </style>
        </div>
    }
}
