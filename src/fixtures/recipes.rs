//! Recipe book.

use super::{standard_document, CUSTOM_TITLE};
use crate::model::{Block, Color, Document, Metadata, INCH};

const LASANHA: &str = r#"
    <b>Rendimento:</b> 8 porções | <b>Tempo de preparo:</b> 2 horas<br/><br/>

    <b>Ingredientes para o molho bolonhesa:</b><br/>
    • 500g de carne moída (patinho ou acém)<br/>
    • 300g de linguiça calabresa sem pele, picada<br/>
    • 1 cebola grande picada<br/>
    • 4 dentes de alho amassados<br/>
    • 2 latas de tomate pelado (800g)<br/>
    • 3 colheres (sopa) de extrato de tomate<br/>
    • 1 xícara de vinho tinto seco<br/>
    • 1 folha de louro<br/>
    • Manjericão fresco a gosto<br/>
    • Sal, pimenta-do-reino e orégano a gosto<br/>
    • 3 colheres (sopa) de azeite<br/><br/>

    <b>Ingredientes para o molho branco (bechamel):</b><br/>
    • 4 colheres (sopa) de manteiga<br/>
    • 4 colheres (sopa) de farinha de trigo<br/>
    • 1 litro de leite integral<br/>
    • Noz-moscada ralada na hora<br/>
    • Sal e pimenta branca a gosto<br/><br/>

    <b>Montagem:</b><br/>
    • 500g de massa para lasanha pré-cozida<br/>
    • 400g de muçarela ralada<br/>
    • 200g de presunto fatiado<br/>
    • 100g de parmesão ralado<br/><br/>

    <b>Modo de preparo do molho bolonhesa:</b><br/>
    1. Em uma panela grande, aqueça o azeite e refogue a cebola até ficar translúcida (3-4 minutos)<br/>
    2. Adicione o alho e refogue por mais 1 minuto até perfumar<br/>
    3. Junte a carne moída e a linguiça, mexendo constantemente para desmanchar bem.
       Cozinhe em fogo alto até dourar (cerca de 8-10 minutos)<br/>
    4. Despeje o vinho tinto e deixe evaporar o álcool (3 minutos)<br/>
    5. Adicione os tomates pelados esmagados com as mãos, o extrato de tomate e o louro<br/>
    6. Tempere com sal, pimenta e orégano. Adicione 1 xícara de água<br/>
    7. Cozinhe em fogo baixo, semi-tampado, por 45 minutos, mexendo ocasionalmente.
       O molho deve reduzir e engrossar<br/>
    8. Nos últimos 5 minutos, adicione o manjericão fresco picado<br/><br/>

    <b>Modo de preparo do molho branco:</b><br/>
    1. Em uma panela média, derreta a manteiga em fogo médio-baixo<br/>
    2. Adicione a farinha de trigo de uma vez e mexa vigorosamente com fouet por 2 minutos
       para formar um roux (pasta dourada)<br/>
    3. Adicione o leite aos poucos, mexendo constantemente para evitar grumos.
       Comece com 1/4 do leite, incorpore bem, depois adicione o restante em 3 etapas<br/>
    4. Continue mexendo até engrossar e começar a ferver (8-10 minutos)<br/>
    5. Tempere com sal, pimenta branca e noz-moscada ralada na hora<br/>
    6. Cozinhe por mais 2 minutos e desligue. O molho deve ter consistência cremosa
       que cubra as costas de uma colher<br/><br/>

    <b>Montagem da lasanha:</b><br/>
    1. Pré-aqueça o forno a 180°C<br/>
    2. Unte um refratário grande (35x25cm) com manteiga<br/>
    3. Espalhe 2 conchas de molho bolonhesa no fundo<br/>
    4. Faça a primeira camada de massa para lasanha, sobrepondo levemente as placas<br/>
    5. Espalhe molho bolonhesa, depois molho branco, presunto e muçarela<br/>
    6. Repita as camadas: massa, bolonhesa, bechamel, presunto, muçarela<br/>
    7. Continue até terminar os ingredientes, finalizando com massa, bechamel e
       uma camada generosa de queijos<br/>
    8. Polvilhe parmesão ralado por cima<br/>
    9. Cubra com papel alumínio e leve ao forno por 30 minutos<br/>
    10. Retire o papel alumínio e deixe gratinar por mais 15-20 minutos até dourar<br/>
    11. Deixe descansar 10 minutos antes de cortar para firmar as camadas<br/><br/>

    <b>Dicas da chef:</b><br/>
    • Para um molho mais rico, adicione 100ml de creme de leite ao molho branco<br/>
    • Se preferir massa fresca, compre 600g de massa fresca para lasanha<br/>
    • O segredo da lasanha cremosa é não economizar no molho branco<br/>
    • Pode congelar antes de assar por até 3 meses (descongele na geladeira)<br/>
    • Acompanha bem com salada verde simples com vinagrete balsâmico
"#;

const BOLO: &str = r#"
    <b>Rendimento:</b> 12 fatias | <b>Tempo de preparo:</b> 1h 30min<br/><br/>

    <b>Ingredientes da massa:</b><br/>
    • 2 xícaras (chá) de farinha de trigo peneirada (280g)<br/>
    • 1 e 3/4 xícara (chá) de açúcar (350g)<br/>
    • 3/4 xícara (chá) de cacau em pó 100% (75g)<br/>
    • 2 ovos grandes em temperatura ambiente<br/>
    • 1 xícara (chá) de leite integral (240ml)<br/>
    • 1/2 xícara (chá) de óleo vegetal (120ml)<br/>
    • 2 colheres (chá) de essência de baunilha<br/>
    • 1 xícara (chá) de água fervente (240ml)<br/>
    • 2 colheres (chá) de fermento em pó<br/>
    • 1 colher (chá) de bicarbonato de sódio<br/>
    • 1/2 colher (chá) de sal<br/><br/>

    <b>Ingredientes da ganache:</b><br/>
    • 300g de chocolate meio amargo picado (50-60% cacau)<br/>
    • 300ml de creme de leite fresco<br/>
    • 2 colheres (sopa) de manteiga sem sal<br/>
    • 1 colher (sopa) de mel ou glucose<br/><br/>

    <b>Modo de preparo da massa:</b><br/>
    1. Pré-aqueça o forno a 180°C. Unte e enfarinhe duas formas redondas de 20cm<br/>
    2. Em uma tigela grande, peneire juntos a farinha, açúcar, cacau, fermento,
       bicarbonato e sal. Mexa bem para incorporar<br/>
    3. Em outra tigela, bata os ovos levemente com um fouet<br/>
    4. Adicione o leite, óleo e baunilha aos ovos. Misture bem<br/>
    5. Faça um buraco no centro dos ingredientes secos e despeje os líquidos<br/>
    6. Mexa delicadamente com uma espátula até começar a incorporar<br/>
    7. Adicione a água fervente aos poucos, mexendo suavemente. A massa ficará
       bem líquida - isso é normal e desejável para um bolo muito úmido<br/>
    8. Divida a massa entre as duas formas<br/>
    9. Asse por 30-35 minutos ou até que um palito saia limpo do centro<br/>
    10. Deixe esfriar nas formas por 10 minutos, depois desenforme sobre uma grade
        e deixe esfriar completamente (importante para não derreter a cobertura)<br/><br/>

    <b>Modo de preparo da ganache:</b><br/>
    1. Pique o chocolate em pedaços pequenos e uniformes e coloque em uma tigela<br/>
    2. Aqueça o creme de leite em uma panela até começar a ferver nas bordas
       (não deixe ferver completamente)<br/>
    3. Despeje o creme quente sobre o chocolate e deixe descansar por 2 minutos
       sem mexer<br/>
    4. Mexa delicadamente do centro para as bordas até obter uma mistura lisa e brilhante<br/>
    5. Adicione a manteiga e o mel, mexendo até incorporar completamente<br/>
    6. Deixe a ganache esfriar em temperatura ambiente por 20-30 minutos até
       atingir consistência de creme espesso (ideal para espalhar)<br/><br/>

    <b>Montagem do bolo:</b><br/>
    1. Coloque a primeira camada de bolo em um prato ou base giratória<br/>
    2. Espalhe uma camada generosa de ganache (cerca de 1/3) sobre o bolo<br/>
    3. Cubra com a segunda camada de bolo, pressionando levemente<br/>
    4. Use o restante da ganache para cobrir o topo e as laterais do bolo<br/>
    5. Para um acabamento profissional, use uma espátula lisa e passe pela lateral
       enquanto gira a base. Alise o topo com movimentos circulares<br/>
    6. Decore com raspas de chocolate, morangos frescos ou deixe a ganache lisa<br/>
    7. Leve à geladeira por pelo menos 1 hora antes de servir para firmar a cobertura<br/><br/>

    <b>Dicas importantes:</b><br/>
    • O segredo deste bolo é a água fervente, que ativa o cacau e deixa a massa úmida<br/>
    • Use cacau em pó de qualidade (não achocolatado) para sabor intenso<br/>
    • Todos os ingredientes devem estar em temperatura ambiente para massa homogênea<br/>
    • Não abra o forno nos primeiros 25 minutos para o bolo não murchar<br/>
    • Para variação, adicione 1 xícara de café forte no lugar da água<br/>
    • O bolo fica ainda melhor no dia seguinte quando os sabores se integram<br/>
    • Pode ser congelado por até 3 meses (sem cobertura)
"#;

const RISOTO: &str = r#"
    <b>Rendimento:</b> 4 porções | <b>Tempo de preparo:</b> 45 minutos<br/><br/>

    <b>Ingredientes:</b><br/>
    • 30g de funghi porcini secos<br/>
    • 1 e 1/2 xícara de arroz arbóreo (300g)<br/>
    • 1 litro de caldo de legumes caseiro (ou galinha)<br/>
    • 1 cebola pequena picada finamente<br/>
    • 3 dentes de alho picados<br/>
    • 1/2 xícara de vinho branco seco (120ml)<br/>
    • 100g de manteiga sem sal (divida em 50g + 50g)<br/>
    • 100g de parmesão ralado na hora<br/>
    • 2 colheres (sopa) de azeite extra virgem<br/>
    • Salsinha fresca picada<br/>
    • Sal e pimenta-do-reino moída na hora<br/><br/>

    <b>Modo de preparo:</b><br/>
    1. Hidrate os funghi porcini em 1 xícara de água morna por 20 minutos.
       Reserve a água (coe com papel toalha para remover areia). Pique os cogumelos<br/>
    2. Em uma panela, aqueça o caldo até ferver, depois mantenha em fogo baixo (quente)<br/>
    3. Em uma panela funda e larga (tipo caçarola), aqueça o azeite e 50g de manteiga<br/>
    4. Refogue a cebola em fogo médio por 5 minutos até ficar translúcida (não dourar)<br/>
    5. Adicione o alho e refogue por 1 minuto<br/>
    6. Junte os funghi porcini picados e refogue por 2 minutos<br/>
    7. Adicione o arroz arbóreo e mexa bem para "nacarar" - cada grão deve ficar
       brilhante e levemente tostado (2-3 minutos). Não pare de mexer<br/>
    8. Despeje o vinho branco e mexa até evaporar completamente o álcool (2 minutos)<br/>
    9. Adicione a água dos funghi coada e mexa até ser absorvida<br/>
    10. Comece a adicionar o caldo quente: 1 concha por vez, mexendo constantemente
        em movimentos circulares. Só adicione mais caldo quando o anterior for
        quase totalmente absorvido<br/>
    11. Continue o processo por 18-20 minutos. O arroz deve ficar "al dente"
        (levemente firme ao morder) e o risoto cremoso, não seco nem muito aguado<br/>
    12. Desligue o fogo e adicione os 50g de manteiga restantes e o parmesão ralado<br/>
    13. Mexa vigorosamente por 1 minuto para "mantecare" (criar cremosidade)<br/>
    14. Tampe e deixe descansar por 2 minutos<br/>
    15. Sirva imediatamente polvilhado com parmesão extra e salsinha fresca<br/><br/>

    <b>Técnica profissional:</b><br/>
    • A técnica "nacarar" (tostar o arroz) é essencial - selará o amido externo<br/>
    • Nunca adicione todo o caldo de uma vez - o processo gradual libera o amido<br/>
    • Mexa constantemente mas sem pressionar o arroz (evita quebrar os grãos)<br/>
    • O movimento correto é circular, "arrastando" o arroz do fundo para cima<br/>
    • Teste o ponto após 16 minutos - o arroz deve ter resistência leve ao morder<br/>
    • O "mantecare" final é o segredo da cremosidade - mexa com energia!<br/>
    • Risoto não espera: deve ser servido imediatamente após pronto<br/><br/>

    <b>Variações:</b><br/>
    • Adicione 200g de cogumelos frescos (shiitake, shimeji) junto com os porcini<br/>
    • Para versão com carne: acrescente 150g de bacon em cubos no início do refogado<br/>
    • Risoto primavera: substitua funghi por aspargos e ervilhas frescas<br/>
    • Use caldo de cogumelos secos para intensificar o sabor umami
"#;

pub(super) fn document() -> Document {
    let mut doc = standard_document(Color::DARK_RED).with_metadata(
        Metadata::titled("Livro de Receitas Práticas").with_subject("Sabores do Mundo em Casa"),
    );

    doc.extend([
        Block::title("Livro de Receitas Práticas").with_style(CUSTOM_TITLE),
        Block::title("Sabores do Mundo em Casa").with_style(CUSTOM_TITLE),
        Block::spacer(0.5 * INCH),
        Block::heading("Lasanha à Bolonhesa Tradicional", 2),
        Block::paragraph(LASANHA),
        Block::page_break(),
        Block::heading("Bolo de Chocolate com Cobertura de Ganache", 2),
        Block::paragraph(BOLO),
        Block::page_break(),
        Block::heading("Risoto de Funghi Porcini com Parmesão", 2),
        Block::paragraph(RISOTO),
    ]);
    doc
}
