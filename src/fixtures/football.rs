//! Football rules and tactics manual.

use super::{standard_document, CUSTOM_TITLE};
use crate::model::{Block, Color, Document, Metadata, INCH};

const REGRAS: &str = r#"
    <b>Dimensões do Campo:</b><br/>
    O campo de futebol deve ter formato retangular com as seguintes dimensões:<br/>
    • Comprimento: mínimo de 90m e máximo de 120m<br/>
    • Largura: mínimo de 45m e máximo de 90m<br/>
    • Campos internacionais: 100-110m x 64-75m<br/>
    • Área de meta: 18,32m x 5,5m em frente ao gol<br/>
    • Área de grande penalidade: 40,32m x 16,5m<br/>
    • Círculo central: raio de 9,15m<br/>
    • Marca de pênalti: 11m da linha de gol<br/><br/>

    <b>Número de Jogadores:</b><br/>
    • Cada equipe é composta por 11 jogadores (incluindo o goleiro)<br/>
    • Mínimo de 7 jogadores para iniciar ou continuar a partida<br/>
    • Máximo de 3-5 substituições por jogo (varia conforme a competição)<br/>
    • Substituição só pode ser feita com a bola fora de jogo e autorização do árbitro<br/>
    • Jogador substituído não pode retornar (exceto em competições amadoras)<br/><br/>

    <b>Duração da Partida:</b><br/>
    • Dois tempos de 45 minutos cada (total de 90 minutos)<br/>
    • Intervalo de 15 minutos entre os tempos<br/>
    • Acréscimos determinados pelo árbitro para compensar paralisações<br/>
    • Prorrogação de 30 minutos (dois tempos de 15) em caso de empate em eliminatórias<br/>
    • Disputa de pênaltis após prorrogação se persistir empate<br/><br/>

    <b>Início e Reinício do Jogo:</b><br/>
    • Sorteio define quem escolhe lado do campo ou pontapé inicial<br/>
    • Bola deve ser chutada para frente do círculo central<br/>
    • Adversários devem estar fora do círculo central (9,15m)<br/>
    • Após gol, time que sofreu o gol faz o reinício<br/>
    • Tiros de meta quando a bola sai pela linha de fundo após toque do ataque<br/>
    • Escanteio quando a bola sai pela linha de fundo após toque da defesa<br/>
    • Arremesso lateral quando a bola cruza completamente a linha lateral<br/><br/>

    <b>Regra do Impedimento:</b><br/>
    Um jogador está em posição de impedimento se:<br/>
    1. Estiver mais próximo da linha de gol adversária que a bola e o penúltimo adversário<br/>
    2. Estiver na metade do campo adversário<br/>
    3. Estiver participando ativamente da jogada (tocando na bola, interferindo no adversário ou tirando vantagem)<br/>
    Não há impedimento quando o jogador recebe a bola diretamente de:<br/>
    • Tiro de meta<br/>
    • Arremesso lateral<br/>
    • Escanteio<br/>
    O impedimento é marcado no momento do passe, não quando o jogador recebe a bola.<br/><br/>

    <b>Faltas e Conduta Incorreta:</b><br/>
    Falta direta (tiro livre direto ou pênalti se dentro da área):<br/>
    • Chutar ou tentar chutar adversário<br/>
    • Derrubar ou tentar derrubar (rasteira, carrinho por trás)<br/>
    • Pular sobre adversário<br/>
    • Carregar violentamente<br/>
    • Segurar, empurrar adversário<br/>
    • Tocar a bola com as mãos deliberadamente (exceto goleiro na área)<br/>
    Falta indireta (tiro livre indireto):<br/>
    • Jogo perigoso sem contato<br/>
    • Obstrução do progresso do adversário<br/>
    • Goleiro segurar a bola por mais de 6 segundos<br/>
    • Goleiro tocar a bola com as mãos após recuo intencional de companheiro<br/><br/>

    <b>Cartões:</b><br/>
    <b>Cartão Amarelo (advertência):</b><br/>
    • Conduta antidesportiva<br/>
    • Desaprovar com palavras ou gestos<br/>
    • Retardar o reinício do jogo<br/>
    • Não respeitar distância no tiro livre<br/>
    • Entrar/sair do campo sem autorização<br/>
    <b>Cartão Vermelho (expulsão):</b><br/>
    • Falta violenta grave<br/>
    • Cuspir em alguém<br/>
    • Negar oportunidade clara de gol com falta ou mão<br/>
    • Linguagem ou gestos ofensivos<br/>
    • Receber segundo cartão amarelo na mesma partida<br/>
    Jogador expulso não pode ser substituído (time fica com 10 jogadores).
"#;

const TATICAS: &str = r#"
    <b>4-4-2 (Formação Equilibrada Clássica):</b><br/>
    A formação mais tradicional e equilibrada do futebol moderno.<br/>
    Estrutura:<br/>
    • 4 defensores: 2 laterais (direito e esquerdo) + 2 zagueiros centrais<br/>
    • 4 meio-campistas: 2 alas (direita e esquerda) + 2 volantes/meias centrais<br/>
    • 2 atacantes: dupla de centroavantes<br/>
    Características:<br/>
    • Boa cobertura defensiva com linha de 4 zagueiros<br/>
    • Meio-campo povoado permite controle do jogo<br/>
    • Dupla de ataque facilita cruzamentos e jogadas aéreas<br/>
    • Laterais têm liberdade para apoiar o ataque<br/>
    • Compacta: distância curta entre linhas (ideal 10-12 metros)<br/>
    Variação 4-4-2 losango:<br/>
    • 1 volante de contenção<br/>
    • 2 meias laterais<br/>
    • 1 meia armador (ponta do losango)<br/>
    • Mais controle no meio, menos largura<br/><br/>

    <b>4-3-3 (Formação Ofensiva com Wingers):</b><br/>
    Formação ofensiva popularizada pelo Barcelona e Liverpool.<br/>
    Estrutura:<br/>
    • 4 defensores: mesma linha do 4-4-2<br/>
    • 3 meio-campistas: 1 volante + 2 meias (ou 2 volantes + 1 meia)<br/>
    • 3 atacantes: 1 centroavante + 2 extremos/pontas (abertos)<br/>
    Características:<br/>
    • Alta amplitude ofensiva (três atacantes abertos)<br/>
    • Domínio de posse com triângulos no meio-campo<br/>
    • Pontas cortam para dentro ou ficam abertos para receber<br/>
    • Exige laterais com boa condição física (cobrem toda a lateral)<br/>
    • Volante crucial como "pivô" entre defesa e ataque<br/>
    Variação 4-3-3 falso 9:<br/>
    • Centroavante recua para criar espaço<br/>
    • Pontas infiltram na área deixada pelo 9<br/>
    • Meia armador sobe para ocupar posição de 10<br/><br/>

    <b>3-5-2 (Formação com Ala-defensores):</b><br/>
    Sistema com três zagueiros e domínio do meio-campo.<br/>
    Estrutura:<br/>
    • 3 defensores: zagueiro central (líbero) + 2 zagueiros laterais<br/>
    • 5 meio-campistas: 2 alas (wing-backs) + 3 meio-campistas centrais<br/>
    • 2 atacantes: dupla de centroavantes<br/>
    Características:<br/>
    • Superioridade numérica no meio-campo (5 vs 4 ou 5 vs 3)<br/>
    • Alas têm função híbrida (defesa e ataque)<br/>
    • Zagueiros centrais podem marcar individualmente ou em zona<br/>
    • Exige excelente condicionamento dos alas<br/>
    • Eficaz contra times com 1 atacante<br/>
    Pontos fracos:<br/>
    • Vulnerável nas costas dos alas quando estes sobem<br/>
    • Espaços entre zagueiros se marcação for individual<br/><br/>

    <b>4-2-3-1 (Formação Moderna de Controle):</b><br/>
    Sistema tático mais usado por seleções nas últimas Copas do Mundo.<br/>
    Estrutura:<br/>
    • 4 defensores: linha tradicional<br/>
    • 2 volantes: dupla de contenção<br/>
    • 3 meio-atacantes: 2 meias abertos + 1 meia central (camisa 10)<br/>
    • 1 centroavante: referência fixa<br/>
    Características:<br/>
    • Dupla de volantes protege a defesa<br/>
    • Meia central (#10) tem liberdade criativa<br/>
    • Transições rápidas com meias abertos em velocidade<br/>
    • Centroavante segura a bola e finaliza<br/>
    • Compacto defensivamente, fluido no ataque<br/>
    Varia para 4-4-2 na defesa:<br/>
    • Meia central recua para linha do meio<br/>
    • Meias abertos fecham como alas<br/>
    • Atacante não fica isolado (meia dá apoio)<br/><br/>

    <b>Conceitos Táticos Modernos:</b><br/>
    <b>Marcação por Zona:</b><br/>
    • Cada jogador responsável por uma zona do campo<br/>
    • Marca o adversário que entrar em sua zona<br/>
    • Mantém organização espacial do time<br/>
    • Dificulta movimentação adversária<br/>
    <b>Marcação Individual:</b><br/>
    • Cada defensor marca um atacante específico<br/>
    • Segue o adversário por todo o campo<br/>
    • Usado em bolas paradas<br/>
    • Arriscado: pode ser desorganizado com movimentações<br/>
    <b>Marcação Pressão:</b><br/>
    • Pressionar adversário com a bola imediatamente<br/>
    • Reduzir tempo e espaço para pensar<br/>
    • Forçar erros e recuperar bola no campo de ataque<br/>
    • Exige condicionamento físico excepcional<br/>
    • Popularizado por Klopp (Gegenpressing)<br/>
    <b>Transições Rápidas (Contra-ataque):</b><br/>
    • Velocidade na passagem defesa-ataque<br/>
    • Aproveitar desorganização adversária<br/>
    • Lançamentos longos ou passes rápidos<br/>
    • Jogadores velozes nas pontas<br/>
    <b>Posse de Bola (Tiki-Taka):</b><br/>
    • Manter posse com passes curtos<br/>
    • Movimentação constante sem bola<br/>
    • Triângulos de passe (3 jogadores próximos)<br/>
    • Cansar adversário e controlar ritmo<br/>
    • Popularizado pelo Barcelona de Guardiola
"#;

pub(super) fn document() -> Document {
    let mut doc = standard_document(Color::DARK_GREEN).with_metadata(
        Metadata::titled("Manual Completo de Futebol")
            .with_subject("Regras, Táticas e Estratégias"),
    );

    doc.extend([
        Block::title("Manual Completo de Futebol").with_style(CUSTOM_TITLE),
        Block::title("Regras, Táticas e Estratégias").with_style(CUSTOM_TITLE),
        Block::spacer(0.5 * INCH),
        Block::heading("Regras Oficiais da FIFA", 2),
        Block::paragraph(REGRAS),
        Block::page_break(),
        Block::heading("Formações Táticas Clássicas", 2),
        Block::paragraph(TATICAS),
    ]);
    doc
}
