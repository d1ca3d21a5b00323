use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::layout::{Badge, Container, Section};
use crate::dom;
use crate::navigation::{Section as Anchor, View};

#[derive(Properties, PartialEq)]
struct ScienceCardProps {
    kicker: AttrValue,
    title: AttrValue,
    description: AttrValue,
    #[prop_or_default]
    extra: Option<AttrValue>,
}

#[function_component(ScienceCard)]
fn science_card(props: &ScienceCardProps) -> Html {
    html! {
        <div class="science-card">
            <span class="science-kicker">{ props.kicker.clone() }</span>
            <h4>{ props.title.clone() }</h4>
            <p class="science-card-body">{ props.description.clone() }</p>
            {
                if let Some(extra) = &props.extra {
                    html! {
                        <>
                            <div class="science-card-rule"></div>
                            <p class="science-card-extra">{ extra.clone() }</p>
                        </>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct RefItemProps {
    num: u32,
    title: AttrValue,
    text: AttrValue,
    #[prop_or_default]
    link: Option<AttrValue>,
}

#[function_component(RefItem)]
fn ref_item(props: &RefItemProps) -> Html {
    let title = match &props.link {
        Some(link) => html! {
            <a href={link.clone()} target="_blank" rel="noopener noreferrer" class="ref-title">
                { props.title.clone() }<span class="ref-external">{" ↗"}</span>
            </a>
        },
        None => html! { <span class="ref-title">{ props.title.clone() }</span> },
    };
    html! {
        <div class="ref-item">
            <div class="ref-num">{ props.num }</div>
            <div>
                { title }
                <p>{ props.text.clone() }</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DomainTileProps {
    title: AttrValue,
    description: AttrValue,
}

#[function_component(DomainTile)]
fn domain_tile(props: &DomainTileProps) -> Html {
    html! {
        <div class="domain-card">
            <div class="domain-card-bar"></div>
            <h4>{ props.title.clone() }</h4>
            <p>{ props.description.clone() }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeadingRowProps {
    title: AttrValue,
    chip: AttrValue,
    #[prop_or_default]
    children: Children,
}

#[function_component(HeadingRow)]
fn heading_row(props: &HeadingRowProps) -> Html {
    html! {
        <div class="heading-row">
            <div class="heading-row-text">
                <h2>{ props.title.clone() }</h2>
                <p>{ for props.children.iter() }</p>
            </div>
            <div class="chip">{ props.chip.clone() }</div>
        </div>
    }
}

const PILLARS: [(&str, &str); 4] = [
    ("Matrizes funcionais consolidadas", "Modelos utilizados em terapia ocupacional e reabilitação."),
    ("Rastreio indireto estruturado", "Organização de informação a partir de questionários estruturados."),
    ("Uso clínico real", "Baseline funcional e acompanhamento evolutivo."),
    ("Escopo ético claro", "Rastreio funcional ≠ teste padronizado ≠ diagnóstico."),
];

#[derive(Properties, PartialEq)]
pub struct SciencePageProps {
    /// Asks the owner of the view state to switch pages.
    pub on_navigate: Callback<View>,
}

#[function_component(SciencePage)]
pub fn science_page(props: &SciencePageProps) -> Html {
    // Every section here is already on screen, so no view switch is needed.
    let jump = |section: Anchor| Callback::from(move |_: MouseEvent| dom::reveal(section));

    let back_home = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(View::Home))
    };

    html! {
        <div class="science-page">
            <header class="science-hero">
                <div class="hero-glow hero-glow-blue"></div>
                <Container class="science-hero-grid">
                    <div class="science-hero-copy">
                        <Badge>{"Página Científica • Base & Método · Módulo Motor"}</Badge>
                        <h1>{"Ciência aplicada ao rastreio funcional motor, com rigor e prudência."}</h1>
                        <p class="science-lead">
                            {"O "}<strong>{"NeuroRastreio Motor™"}</strong>{" utiliza "}
                            <strong>{"matrizes funcionais motoras e ocupacionais"}</strong>
                            {" amplamente descritas na literatura clínica e terapêutica internacional para "}
                            <strong>{"organizar dados funcionais indiretos"}</strong>{", com foco em "}
                            <strong>{"apoio à decisão clínica"}</strong>{", "}
                            <strong>{"baseline"}</strong>{" e "}
                            <strong>{"monitoramento evolutivo"}</strong>{"."}
                        </p>
                        <p class="science-sublead">
                            {"Não se posiciona como diagnóstico e "}
                            <strong>{"não substitui avaliação clínica presencial"}</strong>{"."}
                        </p>
                        <div class="science-actions">
                            <Button onclick={jump(Anchor::References)}>{"Ver referências"}</Button>
                            <Button onclick={jump(Anchor::Ethics)} variant={ButtonVariant::Outline}>
                                {"Ler escopo & ética"}
                            </Button>
                            <div class="chip">{"Rastreio funcional motor indireto • Uso profissional"}</div>
                        </div>
                        <div class="science-notice">
                            <span class="science-notice-icon">{"ℹ"}</span>
                            <div>
                                <strong>{"Aviso importante:"}</strong>
                                {" Esta página descreve "}<strong>{"fundamentos científicos e posicionamento ético"}</strong>
                                {". Não expõe parâmetros internos, pesos algorítmicos ou lógica operacional proprietária."}
                            </div>
                        </div>
                    </div>
                    <aside class="science-pillars">
                        <span class="science-pillars-icon">{"⚗"}</span>
                        <h3>{"O que esta página valida"}</h3>
                        <p>
                            {"Quatro pilares que sustentam o "}<strong>{"NeuroRastreio Motor™"}</strong>
                            {", sem extrapolação conceitual ou marketing exagerado."}
                        </p>
                        { for PILLARS.iter().map(|(title, desc)| html! {
                            <div class="pillar">
                                <span class="check">{"✔"}</span>
                                <div>
                                    <b>{ *title }</b>
                                    <span>{ *desc }</span>
                                </div>
                            </div>
                        }) }
                    </aside>
                </Container>
            </header>

            <Section id={Anchor::Foundations.id()}>
                <Container>
                    <HeadingRow title="Fundamentos científicos do módulo Motor" chip="Ciência → Clínica (sem pular etapas)">
                        {"O NeuroRastreio Motor™ se apoia em "}<strong>{"tradições clínicas consolidadas"}</strong>
                        {" da terapia ocupacional, reabilitação funcional e ciências do movimento, traduzidas para um "}
                        <strong>{"ambiente digital de rastreio funcional indireto"}</strong>
                        {", adequado à prática clínica contemporânea."}
                    </HeadingRow>
                    <div class="science-grid three">
                        <ScienceCard
                            kicker="Base"
                            title="Matrizes funcionais motoras consolidadas"
                            description="Utilização de modelos amplamente reconhecidos para análise de função manual, autonomia, perfil sensorial, força funcional e impacto da dor."
                        />
                        <ScienceCard
                            kicker="Métrica"
                            title="Organização funcional indireta"
                            description="O sistema não mede performance direta. Ele organiza percepções clínicas estruturadas, reduzindo ruído e aumentando consistência interpretativa."
                        />
                        <ScienceCard
                            kicker="Finalidade"
                            title="Rastreio funcional e acompanhamento"
                            description="Produzir baseline motor e acompanhar evolução funcional ao longo do processo terapêutico."
                        />
                    </div>
                    <div class="science-callout">
                        <span class="science-callout-icon">{"⚖"}</span>
                        <div>
                            <b>{"Tradução correta para o contexto clínico"}</b>
                            <p>
                                {"As matrizes utilizadas no NeuroRastreio Motor™ são aplicadas como "}
                                <strong>{"rastreio funcional indireto"}</strong>{", e "}<strong>{"não"}</strong>
                                {" como testes motores padronizados, instrumentos psicométricos ou equivalentes diagnósticos."}
                            </p>
                        </div>
                    </div>
                </Container>
            </Section>

            <Section id={Anchor::Paradigms.id()} class="science-tinted">
                <Container>
                    <HeadingRow title="Domínios funcionais do rastreio motor" chip="7 domínios • estrutura funcional integrada">
                        {"Abaixo estão os "}<strong>{"domínios funcionais"}</strong>
                        {" organizados pelo NeuroRastreio Motor™. Eles representam "}
                        <strong>{"camadas de observação funcional"}</strong>{", não testes isolados."}
                    </HeadingRow>
                    <div class="domain-grid primary">
                        <DomainTile title="Perfil Sensorial Funcional" description="Organização sensorial e impacto no comportamento motor e ocupacional." />
                        <DomainTile title="Desenvolvimento Motor Funcional" description="Marcos motores aplicados à funcionalidade cotidiana." />
                        <DomainTile title="Força Funcional" description="Capacidade funcional relacionada à postura, escrita e manipulação." />
                    </div>
                    <div class="domain-grid secondary">
                        <DomainTile title="Função Manual" description="Coordenação fina, precisão e resistência funcional." />
                        <DomainTile title="Autonomia (AVDs)" description="Independência funcional nas atividades diárias." />
                        <DomainTile title="Dor & Impacto Funcional" description="Interferência da dor na execução motora." />
                        <DomainTile title="Autopercepção Funcional" description="Discrepância entre percepção e desempenho observado." />
                    </div>
                    <div class="science-note">
                        <b>{"Nota de proteção (anti-ruído e anti-má interpretação):"}</b>
                        {"Os domínios são apresentados como "}<strong>{"estrutura funcional integrada"}</strong>
                        {", sem equivalência a testes formais ou escalas diagnósticas isoladas."}
                    </div>
                </Container>
            </Section>

            <Section id={Anchor::Ethics.id()}>
                <Container>
                    <HeadingRow title="Escopo, ética e limites do NeuroRastreio Motor™" chip="Blindagem clínica & institucional">
                        {"Esta seção define claramente "}<strong>{"o que o módulo é"}</strong>{" e "}
                        <strong>{"o que ele não é"}</strong>{", assegurando uso clínico responsável e defensável."}
                    </HeadingRow>
                    <div class="science-grid two">
                        <ScienceCard
                            kicker="O que é"
                            title="Rastreio funcional motor indireto"
                            description="Ferramenta de apoio à decisão profissional, voltada à organização de informações funcionais motoras, para baseline, triagem e acompanhamento evolutivo."
                            extra="Uso típico: Primeira consulta • Início da intervenção • Reavaliações • Atendimento remoto assistido"
                        />
                        <ScienceCard
                            kicker="O que não é"
                            title="Não é diagnóstico"
                            description="Não substitui avaliação clínica completa, não é instrumento psicométrico, não gera hipótese diagnóstica automática e não deve ser utilizado como laudo conclusivo."
                            extra="Regra de ouro: Os dados orientam a conduta, não “carimbam” diagnóstico."
                        />
                    </div>
                    <div class="science-callout muted">
                        <span class="science-callout-icon">{"📱"}</span>
                        <div>
                            <b>{"Aplicação remota assistida"}</b>
                            <p>
                                {"Quando utilizada remotamente, a aplicação ocorre como "}
                                <strong>{"extensão do acompanhamento clínico"}</strong>
                                {", com envio via WhatsApp e execução em ambiente digital controlado."}
                            </p>
                        </div>
                    </div>
                </Container>
            </Section>

            <Section id={Anchor::References.id()} class="science-tinted">
                <Container>
                    <HeadingRow title="Referências e bases conceituais" chip="Links conceituais • consulta externa">
                        {"Fontes públicas e institucionais que fundamentam a prática clínica funcional, terapia ocupacional e reabilitação. (Links exemplificativos, "}
                        <strong>{"não"}</strong>{" descrevem implementação do sistema.)"}
                    </HeadingRow>
                    <div class="ref-list">
                        <RefItem
                            num={1}
                            title="Organizações e publicações em Terapia Ocupacional"
                            text="Bases normativas e conceituais do desempenho ocupacional e participação."
                            link="https://www.aota.org/"
                        />
                        <RefItem
                            num={2}
                            title="Literatura de reabilitação funcional"
                            text="Estudos sobre marcos do desenvolvimento motor e estratégias de intervenção em componentes de desempenho."
                        />
                        <RefItem
                            num={3}
                            title="Guias de avaliação de AVDs e função manual"
                            text="Modelos clássicos para mensuração de independência e competência motora fina."
                        />
                        <RefItem
                            num={4}
                            title="Produção acadêmica em ciências do movimento"
                            text="Pesquisas sobre controle motor, força funcional e impacto sensorial na coordenação."
                        />
                        <div class="ref-footnote">
                            <b>{"Nota importante sobre referências:"}</b>
                            {"As referências são "}<strong>{"contextuais"}</strong>
                            {". Parâmetros internos e lógica operacional são protegidos como propriedade intelectual."}
                        </div>
                    </div>
                </Container>
            </Section>

            <Section id={Anchor::ScienceCta.id()}>
                <Container>
                    <div class="cta-panel">
                        <h2>{"Ciência só importa quando vira decisão clínica."}</h2>
                        <p>
                            {"Veja como o NeuroRastreio Motor™ transforma fundamentos clínicos em "}
                            <strong>{"organização funcional clara"}</strong>
                            {", com posicionamento ético e aplicação prática."}
                        </p>
                        <Button onclick={back_home} variant={ButtonVariant::Secondary} class="btn-large">
                            {"Voltar para a página principal →"}
                        </Button>
                    </div>
                </Container>
            </Section>

            <footer class="science-footer">
                <Container>
                    <div class="science-footer-top">
                        <div class="footer-brand">{"✥ NEURORASTREIO MOTOR"}</div>
                        <div class="science-footer-links">
                            <button type="button" onclick={jump(Anchor::Ethics)}>{"Ética"}</button>
                            <button type="button" onclick={jump(Anchor::Paradigms)}>{"Domínios"}</button>
                        </div>
                    </div>
                    <p class="science-footer-statement">
                        {"O NeuroRastreio Motor™ é um instrumento de "}<strong>{"rastreio funcional indireto"}</strong>{". "}
                        {"Deve ser utilizado por profissional habilitado como apoio à investigação clínica e ao acompanhamento terapêutico. "}
                        {"Não substitui testes formais nem avaliações clínicas completas."}
                    </p>
                </Container>
            </footer>

            <style>
                {r#"
                    .science-hero {
                        position: relative;
                        padding: 3rem 0 5rem;
                        overflow: hidden;
                        background: rgba(248, 250, 252, 0.5);
                    }

                    @media (min-width: 768px) {
                        .science-hero { padding-top: 5rem; }
                    }

                    .science-hero .hero-glow {
                        position: absolute;
                        width: 24rem;
                        height: 24rem;
                        border-radius: 9999px;
                        filter: blur(64px);
                        opacity: 0.3;
                        top: -5rem;
                        right: -5rem;
                        background: #dbeafe;
                    }

                    .science-hero-grid {
                        position: relative;
                        display: grid;
                        gap: 3rem;
                        align-items: start;
                    }

                    @media (min-width: 1024px) {
                        .science-hero-grid { grid-template-columns: 7fr 5fr; }
                    }

                    .science-hero .badge {
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                    }

                    .science-hero h1 {
                        font-size: 2.25rem;
                        font-weight: 800;
                        letter-spacing: -0.02em;
                        line-height: 1.15;
                        margin-bottom: 1.5rem;
                    }

                    @media (min-width: 768px) {
                        .science-hero h1 { font-size: 3rem; }
                    }

                    .science-lead { font-size: 1.25rem; color: #475569; line-height: 1.6; margin-bottom: 2rem; }
                    .science-sublead { font-size: 1.125rem; color: #475569; margin-bottom: 2rem; }

                    .science-actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        margin-bottom: 2rem;
                    }

                    .chip {
                        display: inline-flex;
                        align-items: center;
                        padding: 0.5rem 1rem;
                        background: #fff;
                        border: 1px solid #e2e8f0;
                        border-radius: 9999px;
                        font-size: 0.75rem;
                        font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
                        color: #64748b;
                        flex-shrink: 0;
                        height: fit-content;
                    }

                    .science-notice, .science-callout {
                        display: flex;
                        gap: 1rem;
                        padding: 1rem;
                        background: rgba(255, 255, 255, 0.8);
                        border: 1px solid #e2e8f0;
                        border-radius: 1rem;
                        font-size: 0.875rem;
                        color: #475569;
                        line-height: 1.6;
                    }

                    .science-notice-icon, .science-callout-icon {
                        flex-shrink: 0;
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 0.75rem;
                        background: #dbeafe;
                        color: #1e3a8a;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.25rem;
                    }

                    .science-pillars {
                        position: relative;
                        background: #fff;
                        padding: 2rem;
                        border-radius: 1.5rem;
                        border: 1px solid #f1f5f9;
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                    }

                    .science-pillars-icon {
                        position: absolute;
                        top: -1rem;
                        right: -1rem;
                        background: #1e3a8a;
                        color: #fff;
                        padding: 0.75rem;
                        border-radius: 1rem;
                        font-size: 1.5rem;
                    }

                    .science-pillars h3 { font-size: 1.25rem; margin-bottom: 0.5rem; }
                    .science-pillars > p { font-size: 0.875rem; color: #64748b; margin-bottom: 1.5rem; }

                    .pillar {
                        display: flex;
                        gap: 1rem;
                        padding: 1rem;
                        margin-bottom: 1rem;
                        border-radius: 0.75rem;
                        background: rgba(248, 250, 252, 0.5);
                    }

                    .pillar b { display: block; font-size: 0.875rem; }
                    .pillar span:not(.check) { display: block; font-size: 0.75rem; color: #64748b; margin-top: 0.25rem; }

                    .heading-row {
                        display: flex;
                        flex-direction: column;
                        justify-content: space-between;
                        gap: 1.5rem;
                        margin-bottom: 3rem;
                    }

                    @media (min-width: 768px) {
                        .heading-row { flex-direction: row; align-items: flex-end; }
                    }

                    .heading-row-text { max-width: 48rem; }
                    .heading-row h2 { font-size: 1.875rem; font-weight: 700; margin-bottom: 1rem; }
                    .heading-row p { color: #475569; line-height: 1.6; }

                    .science-grid { display: grid; gap: 1.5rem; }

                    @media (min-width: 768px) {
                        .science-grid.three { grid-template-columns: repeat(3, 1fr); }
                        .science-grid.two { grid-template-columns: repeat(2, 1fr); gap: 2rem; }
                    }

                    .science-card {
                        display: flex;
                        flex-direction: column;
                        height: 100%;
                        background: #fff;
                        padding: 2rem;
                        border-radius: 1rem;
                        border: 1px solid #e2e8f0;
                        transition: box-shadow 0.2s ease;
                    }

                    .science-card:hover { box-shadow: 0 4px 12px rgba(15, 23, 42, 0.08); }

                    .science-kicker {
                        font-size: 0.75rem;
                        font-weight: 900;
                        color: #1e3a8a;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        margin-bottom: 1rem;
                    }

                    .science-card h4 { font-size: 1.25rem; margin-bottom: 0.75rem; }
                    .science-card-body { flex-grow: 1; font-size: 0.875rem; color: #475569; line-height: 1.6; }
                    .science-card-rule { height: 1px; background: #f1f5f9; margin: 1rem 0; }
                    .science-card-extra { font-size: 0.75rem; font-weight: 700; line-height: 1.6; }

                    .science-callout {
                        margin-top: 2rem;
                        padding: 1.5rem;
                        align-items: center;
                        background: rgba(239, 246, 255, 0.5);
                        border-color: #dbeafe;
                    }

                    .science-callout.muted { align-items: flex-start; background: #f8fafc; border-color: #e2e8f0; }
                    .science-callout.muted .science-callout-icon { background: #fff; border: 1px solid #e2e8f0; color: #94a3b8; }
                    .science-callout b { display: block; color: #0f172a; margin-bottom: 0.25rem; }

                    .science-tinted {
                        background: rgba(248, 250, 252, 0.5);
                        border-top: 1px solid #f1f5f9;
                        border-bottom: 1px solid #f1f5f9;
                    }

                    .science-page .domain-grid { display: grid; gap: 1.5rem; margin-bottom: 1.5rem; }

                    @media (min-width: 640px) {
                        .science-page .domain-grid.secondary { grid-template-columns: repeat(2, 1fr); }
                    }

                    @media (min-width: 768px) {
                        .science-page .domain-grid.primary { grid-template-columns: repeat(3, 1fr); }
                    }

                    @media (min-width: 1024px) {
                        .science-page .domain-grid.secondary { grid-template-columns: repeat(4, 1fr); }
                    }

                    .science-page .domain-card {
                        background: #fff;
                        padding: 1.5rem;
                        border-radius: 0.75rem;
                        border: 1px solid #e2e8f0;
                    }

                    .science-page .domain-card-bar {
                        height: 0.375rem;
                        width: 2.5rem;
                        background: #1e3a8a;
                        border-radius: 9999px;
                        margin-bottom: 1rem;
                    }

                    .science-page .domain-card h4 { margin-bottom: 0.5rem; }
                    .science-page .domain-card p { font-size: 0.875rem; color: #475569; line-height: 1.6; }

                    .science-note {
                        margin-top: 3rem;
                        padding: 1.5rem;
                        background: #fff;
                        border: 1px solid #e2e8f0;
                        border-radius: 1rem;
                        font-size: 0.875rem;
                        color: #475569;
                        line-height: 1.6;
                    }

                    .science-note b, .ref-footnote b { display: block; color: #0f172a; margin-bottom: 0.5rem; }

                    .ref-list {
                        background: #fff;
                        padding: 1.5rem;
                        border-radius: 1.5rem;
                        border: 1px solid #e2e8f0;
                    }

                    .ref-item {
                        display: flex;
                        gap: 1rem;
                        padding: 1rem;
                        border-radius: 0.75rem;
                        transition: background 0.2s ease;
                    }

                    .ref-item:hover { background: #f8fafc; }

                    .ref-num {
                        flex-shrink: 0;
                        width: 2rem;
                        height: 2rem;
                        border-radius: 0.5rem;
                        border: 1px solid #e2e8f0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #1e3a8a;
                        font-weight: 900;
                        font-size: 0.875rem;
                    }

                    .ref-title { color: #1e3a8a; font-weight: 700; text-decoration: none; }
                    a.ref-title:hover { text-decoration: underline; }
                    .ref-external { opacity: 0; transition: opacity 0.2s ease; }
                    .ref-item:hover .ref-external { opacity: 1; }
                    .ref-item p { font-size: 0.875rem; color: #64748b; margin-top: 0.25rem; line-height: 1.6; }

                    .ref-footnote {
                        margin-top: 2rem;
                        padding: 1.5rem;
                        background: #f8fafc;
                        border-radius: 1rem;
                        font-size: 0.75rem;
                        color: #94a3b8;
                        font-style: italic;
                    }

                    .ref-footnote b { font-style: normal; color: #475569; }

                    .science-footer {
                        padding: 4rem 0 2rem;
                        border-top: 1px solid #f1f5f9;
                        font-size: 0.875rem;
                    }

                    .science-footer-top {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        justify-content: space-between;
                        align-items: center;
                        margin-bottom: 2rem;
                    }

                    @media (min-width: 768px) {
                        .science-footer-top { flex-direction: row; }
                    }

                    .science-footer .footer-brand { font-weight: 700; }

                    .science-footer-links { display: flex; gap: 1.5rem; }

                    .science-footer-links button {
                        background: none;
                        border: none;
                        cursor: pointer;
                        font-size: 0.75rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        color: #64748b;
                    }

                    .science-footer-links button:hover { color: #1e3a8a; }

                    .science-footer-statement {
                        padding-top: 2rem;
                        border-top: 1px solid #f1f5f9;
                        font-size: 0.75rem;
                        color: #94a3b8;
                        line-height: 1.6;
                    }
                "#}
            </style>
        </div>
    }
}
