//! Smartphone user manual.

use super::{standard_document, CUSTOM_TITLE};
use crate::model::{Block, Color, Document, Metadata, INCH};

const SPECS: [&str; 13] = [
    "<b>Processador:</b> Apple A17 Pro com GPU de 6 núcleos e Neural Engine de 16 núcleos",
    "<b>Tela:</b> Super Retina XDR OLED de 6,7 polegadas com ProMotion 120Hz e Always-On Display",
    "<b>Resolução:</b> 2796 x 1290 pixels (460 ppi) com suporte a HDR, Dolby Vision e True Tone",
    "<b>Câmera Principal:</b> Sistema triplo com sensor principal de 48MP (f/1.78), ultra-wide de 12MP (f/2.2) e teleobjetiva periscópica de 12MP com zoom óptico de 5x",
    "<b>Câmera Frontal:</b> TrueDepth de 12MP com autofoco e gravação 4K",
    "<b>Armazenamento:</b> Opções de 256GB, 512GB ou 1TB (NVMe SSD)",
    "<b>Memória RAM:</b> 8GB LPDDR5",
    "<b>Bateria:</b> 4.422 mAh com carregamento rápido de 27W via USB-C, carregamento sem fio MagSafe de 15W e Qi de 7,5W",
    "<b>Conectividade:</b> 5G (sub-6GHz e mmWave), Wi-Fi 6E, Bluetooth 5.3, UWB (Ultra Wideband), NFC",
    "<b>Dimensões:</b> 159,9 x 76,7 x 8,25 mm",
    "<b>Peso:</b> 221 gramas",
    "<b>Material:</b> Chassis de titânio aeroespacial grau 5 com vidro Ceramic Shield",
    "<b>Resistência:</b> IP68 (resistente a água até 6 metros por 30 minutos)",
];

const CAMERA: &str = r#"
    <b>Sensor Principal de 48 Megapixels:</b><br/>
    O sensor quad-pixel de 48MP permite capturar imagens em resolução máxima
    ou combinar pixels para fotos de 12MP com melhor desempenho em baixa luminosidade.
    O sistema usa pixel binning 2x2 para produzir fotos de 12MP com excelente
    qualidade e menor ruído.<br/><br/>

    <b>Teleobjetiva Periscópica com Zoom 5x:</b><br/>
    A inovadora lente periscópica utiliza um sistema de prisma que dobra a luz
    em 90 graus, permitindo um caminho óptico mais longo dentro do corpo compacto
    do telefone. Isso resulta em zoom óptico de 5x (120mm equivalente) sem perda
    de qualidade. O sistema de estabilização óptica de imagem (OIS) de sensor
    shift trabalha em conjunto com o OIS da lente para reduzir tremores.<br/><br/>

    <b>Modo Retrato Avançado:</b><br/>
    O modo retrato agora funciona automaticamente ao detectar pessoas ou animais
    de estimação no enquadramento. O sistema captura informações de profundidade
    durante a foto, permitindo ajustar o ponto focal e a intensidade do bokeh
    posteriormente na galeria. Suporta até 9 níveis de abertura virtual (f/1.4 a f/16).<br/><br/>

    <b>ProRAW e ProRes:</b><br/>
    Fotógrafos profissionais podem capturar em Apple ProRAW de 48MP, mantendo
    controle total sobre processamento de imagem. Para vídeo, o ProRes 4K a 60fps
    oferece qualidade cinematográfica com taxa de bits de até 6Gbps quando gravado
    em armazenamento externo via USB-C.<br/><br/>

    <b>Modo Noturno Aprimorado:</b><br/>
    Todas as câmeras (principal, ultra-wide e teleobjetiva) agora suportam modo
    noturno. O processamento de Deep Fusion combina múltiplas exposições usando
    aprendizado de máquina para produzir fotos nítidas mesmo com apenas 1 lux de luz.
"#;

const SOFTWARE: &str = r#"
    <b>Action Button Personalizável:</b><br/>
    O novo botão Action substitui o switch de silencioso e pode ser programado
    para executar diversas funções: ativar câmera, lanterna, gravar memo de voz,
    iniciar foco personalizado, traduzir texto, executar atalho do app Atalhos,
    ou controlar acessibilidade.<br/><br/>

    <b>Dynamic Island Interativa:</b><br/>
    A Dynamic Island expande e contrai para mostrar alertas, notificações e
    atividades em tempo real como música, chamadas, timers, navegação GPS e status
    de entrega. Suporta múltiplas atividades simultâneas com toque longo para expandir.<br/><br/>

    <b>StandBy Mode:</b><br/>
    Quando carregando horizontalmente, o iPhone transforma-se em display inteligente
    mostrando relógio grande, fotos, widgets personalizáveis e controles de casa
    inteligente. Modo noturno vermelho ativa automaticamente em ambientes escuros.<br/><br/>

    <b>Bateria e Desempenho:</b><br/>
    O chip A17 Pro oferece até 29 horas de reprodução de vídeo. O Modo de Baixo
    Consumo reduz consumo de energia desativando refresh de 120Hz, efeitos visuais
    e downloads automáticos. Carregamento otimizado aprende sua rotina para
    preservar a saúde da bateria a longo prazo, mantendo carga em 80% até pouco
    antes de você desconectar o dispositivo.
"#;

const QUICK_GUIDE: &str = r#"
    <b>Configuração Inicial:</b><br/>
    1. Ligue o iPhone pressionando o botão lateral por 3 segundos<br/>
    2. Aproxime seu iPhone antigo para transferir dados via Quick Start<br/>
    3. Configure Face ID olhando para a câmera frontal<br/>
    4. Restaure backup do iCloud ou configure como novo<br/><br/>

    <b>Gestos Essenciais:</b><br/>
    • Deslizar de baixo para cima: Tela inicial<br/>
    • Deslizar de baixo e segurar: Multitarefas<br/>
    • Deslizar da direita superior: Central de Controle<br/>
    • Deslizar da esquerda superior: Notificações<br/><br/>

    <b>Manutenção:</b><br/>
    • Use apenas cabos USB-C certificados MFi<br/>
    • Limpe a tela com pano de microfibra levemente umedecido<br/>
    • Evite temperaturas extremas (operar entre 0°C e 35°C)<br/>
    • Atualize o iOS regularmente em Ajustes &gt; Geral &gt; Atualização de Software
"#;

pub(super) fn document() -> Document {
    let mut doc = standard_document(Color::DARK_BLUE).with_metadata(
        Metadata::titled("Manual do Usuário - iPhone 15 Pro Max")
            .with_subject("Especificações, recursos e guia de uso"),
    );

    doc.extend([
        Block::title("Manual do Usuário").with_style(CUSTOM_TITLE),
        Block::title("iPhone 15 Pro Max").with_style(CUSTOM_TITLE),
        Block::spacer(0.5 * INCH),
        Block::heading("Bem-vindo ao seu novo iPhone 15 Pro Max", 2),
        Block::paragraph(
            "O iPhone 15 Pro Max representa o ápice da tecnologia móvel da Apple. \
             Este manual fornece informações detalhadas sobre os recursos, especificações \
             e guia de uso do seu novo dispositivo.",
        ),
        Block::spacer(0.3 * INCH),
        Block::heading("Especificações Técnicas", 2),
    ]);
    for spec in SPECS {
        doc.push(Block::paragraph(spec));
        doc.push(Block::spacer(0.1 * INCH));
    }

    doc.extend([
        Block::page_break(),
        Block::heading("Sistema de Câmera Avançado", 2),
        Block::paragraph(CAMERA),
        Block::page_break(),
        Block::heading("Recursos de Software iOS 17", 2),
        Block::paragraph(SOFTWARE),
        Block::spacer(0.3 * INCH),
        Block::heading("Guia de Início Rápido", 2),
        Block::paragraph(QUICK_GUIDE),
    ]);
    doc
}
